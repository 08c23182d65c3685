//! Payment confirmation
//!
//! One generic confirmation machine covers every mobile-money provider:
//! collect the recipient and sender numbers, collect the wallet PIN, then a
//! simulated transaction that always succeeds. Provider-specific display
//! details live in a metadata mapping, not in the control flow.

use std::time::Duration;

use thiserror::Error;

/// Simulated wallet transaction time between PIN submission and success.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1000);

const PHONE_DIGITS: usize = 10;
const PIN_MIN_DIGITS: usize = 4;
const PIN_MAX_LEN: usize = 6;

/// Mobile-money rails the storefront can charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// EcoCash mobile wallet.
    EcoCash,

    /// InnBucks wallet.
    InnBucks,

    /// OMari wallet.
    OMari,
}

/// Display metadata for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderMeta {
    /// Customer-facing wallet name.
    pub name: &'static str,

    /// Short line shown under the name.
    pub tagline: &'static str,

    /// Asset key for the wallet logo.
    pub logo: &'static str,
}

const ECOCASH_META: ProviderMeta = ProviderMeta {
    name: "EcoCash",
    tagline: "Mobile wallet",
    logo: "ecocash",
};

const INNBUCKS_META: ProviderMeta = ProviderMeta {
    name: "InnBucks",
    tagline: "Wallet",
    logo: "innbucks",
};

const OMARI_META: ProviderMeta = ProviderMeta {
    name: "OMari",
    tagline: "Wallet",
    logo: "omari",
};

impl Provider {
    /// All providers, in display order.
    pub const ALL: [Provider; 3] = [Provider::EcoCash, Provider::InnBucks, Provider::OMari];

    /// Display metadata for this provider.
    #[must_use]
    pub fn meta(self) -> &'static ProviderMeta {
        match self {
            Provider::EcoCash => &ECOCASH_META,
            Provider::InnBucks => &INNBUCKS_META,
            Provider::OMari => &OMARI_META,
        }
    }
}

/// Steps of one payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStage {
    /// Collecting the recipient and sender numbers.
    CollectingNumbers,

    /// Collecting the wallet PIN.
    CollectingPin,

    /// The simulated transaction completed.
    Succeeded,
}

/// Validation failures surfaced to the user as inline messages.
///
/// Both guards are recoverable: the attempt keeps its current stage and the
/// user corrects the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// One or both phone numbers are not exactly ten digits.
    #[error("Both recipient and sender numbers must be 10 digits.")]
    PhoneDigits,

    /// The PIN has fewer than four digits.
    #[error("PIN must be at least 4 digits.")]
    PinTooShort,

    /// The submitted action does not belong to the attempt's current step.
    #[error("action not available at this step")]
    StageMismatch,
}

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// One in-progress simulated payment flow for a single provider.
///
/// Never persisted; dropped whole when the dialog is dismissed or another
/// provider is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAttempt {
    provider: Provider,
    recipient: String,
    sender: String,
    pin: String,
    stage: AttemptStage,
}

impl PaymentAttempt {
    /// Start a fresh attempt for a provider, at the number-collection step.
    #[must_use]
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            recipient: String::new(),
            sender: String::new(),
            pin: String::new(),
            stage: AttemptStage::CollectingNumbers,
        }
    }

    /// Provider this attempt charges through.
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Current step.
    #[must_use]
    pub fn stage(&self) -> AttemptStage {
        self.stage
    }

    /// Stored recipient number, always digits-only.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Stored sender number, always digits-only.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Replace the recipient number. Non-digits are dropped as the user
    /// types and the value is capped at ten digits.
    pub fn set_recipient(&mut self, input: &str) {
        self.recipient = digits(input).chars().take(PHONE_DIGITS).collect();
    }

    /// Replace the sender number. Non-digits are dropped as the user types
    /// and the value is capped at ten digits.
    pub fn set_sender(&mut self, input: &str) {
        self.sender = digits(input).chars().take(PHONE_DIGITS).collect();
    }

    /// Replace the PIN entry, capped at six characters. Digits are
    /// enforced at submission, not here.
    pub fn set_pin(&mut self, input: &str) {
        self.pin = input.chars().take(PIN_MAX_LEN).collect();
    }

    /// Advance from number collection to PIN collection.
    ///
    /// # Errors
    ///
    /// [`PaymentError::PhoneDigits`] unless both numbers are exactly ten
    /// digits, and [`PaymentError::StageMismatch`] outside the
    /// number-collection step. The stage is unchanged on error.
    pub fn submit_numbers(&mut self) -> Result<(), PaymentError> {
        if self.stage != AttemptStage::CollectingNumbers {
            return Err(PaymentError::StageMismatch);
        }

        if self.recipient.len() != PHONE_DIGITS || self.sender.len() != PHONE_DIGITS {
            return Err(PaymentError::PhoneDigits);
        }

        self.stage = AttemptStage::CollectingPin;

        Ok(())
    }

    /// Validate the PIN and complete the simulated transaction.
    ///
    /// Callers hold for [`PROCESSING_DELAY`] before presenting the success
    /// step; the transaction itself cannot fail once the PIN passes the
    /// length gate.
    ///
    /// # Errors
    ///
    /// [`PaymentError::PinTooShort`] when the PIN has fewer than four
    /// digits after stripping, and [`PaymentError::StageMismatch`] outside
    /// the PIN step. The stage is unchanged on error.
    pub fn submit_pin(&mut self) -> Result<(), PaymentError> {
        if self.stage != AttemptStage::CollectingPin {
            return Err(PaymentError::StageMismatch);
        }

        if digits(&self.pin).len() < PIN_MIN_DIGITS {
            return Err(PaymentError::PinTooShort);
        }

        self.stage = AttemptStage::Succeeded;

        Ok(())
    }

    /// Whether the attempt reached the success step.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.stage == AttemptStage::Succeeded
    }
}

/// Owner of the single active attempt across all providers.
///
/// Exactly one payment dialog can be open at a time, so selecting a
/// provider while another attempt is mid-flow silently discards it.
#[derive(Debug, Default)]
pub struct PaymentFlow {
    active: Option<PaymentAttempt>,
}

impl PaymentFlow {
    /// A flow with no attempt in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a provider, discarding any attempt already in progress.
    pub fn select(&mut self, provider: Provider) -> &mut PaymentAttempt {
        self.active.insert(PaymentAttempt::new(provider))
    }

    /// Dismiss the open dialog, discarding the in-progress attempt.
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// The attempt in progress, if any.
    #[must_use]
    pub fn active(&self) -> Option<&PaymentAttempt> {
        self.active.as_ref()
    }

    /// Mutable access to the attempt in progress, if any.
    pub fn active_mut(&mut self) -> Option<&mut PaymentAttempt> {
        self.active.as_mut()
    }

    /// Take the attempt out of the flow once it has succeeded.
    ///
    /// Returns `None` (leaving the flow untouched) while no attempt has
    /// reached the success step.
    pub fn take_succeeded(&mut self) -> Option<PaymentAttempt> {
        if self.active.as_ref().is_some_and(PaymentAttempt::succeeded) {
            self.active.take()
        } else {
            None
        }
    }
}
