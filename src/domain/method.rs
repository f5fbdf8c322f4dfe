use super::validation::FieldRule;

/// One field a payment method collects: the key it is stored under, the
/// prompt shown to the user, and the rule its value must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub prompt: &'static str,
    pub rule: FieldRule,
}

const CREDIT_CARD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        prompt: "Name: ",
        rule: FieldRule::Name,
    },
    FieldSpec {
        key: "creditCardNumber",
        prompt: "Credit Card Number: ",
        rule: FieldRule::CardNumber,
    },
    FieldSpec {
        key: "creditCardExpirationDate",
        prompt: "Expiration Date (MM/DD): ",
        rule: FieldRule::ExpirationDate,
    },
];

const BANK_DRAFT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        prompt: "Name: ",
        rule: FieldRule::Name,
    },
    FieldSpec {
        key: "bankRoutingNumber",
        prompt: "Bank Routing Number: ",
        rule: FieldRule::RoutingNumber,
    },
    FieldSpec {
        key: "bankAccountNumber",
        prompt: "Bank Account Number: ",
        rule: FieldRule::AccountNumber,
    },
];

const ONLINE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "email",
        prompt: "Email Address: ",
        rule: FieldRule::Email,
    },
    FieldSpec {
        key: "paymentPassword",
        prompt: "Payment Password: ",
        rule: FieldRule::Password,
    },
];

const OFFLINE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        prompt: "Name: ",
        rule: FieldRule::Name,
    },
    FieldSpec {
        key: "billingAddress",
        prompt: "Billing Address: ",
        rule: FieldRule::Address,
    },
];

/// The closed set of supported payment methods.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentMethod {
    CreditCard,
    BankDraft,
    Online,
    Offline,
}

impl PaymentMethod {
    /// Maps a variant tag to its method. Any string outside the four known
    /// tags is unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "creditcard" => Some(Self::CreditCard),
            "bankdraft" => Some(Self::BankDraft),
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::CreditCard => "creditcard",
            Self::BankDraft => "bankdraft",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// The fields this method gathers, in prompt order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::CreditCard => CREDIT_CARD_FIELDS,
            Self::BankDraft => BANK_DRAFT_FIELDS,
            Self::Online => ONLINE_FIELDS,
            Self::Offline => OFFLINE_FIELDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for method in [
            PaymentMethod::CreditCard,
            PaymentMethod::BankDraft,
            PaymentMethod::Online,
            PaymentMethod::Offline,
        ] {
            assert_eq!(PaymentMethod::from_tag(method.tag()), Some(method));
        }
    }

    #[test]
    fn test_unknown_tags_are_rejected() {
        assert!(PaymentMethod::from_tag("bitcoin").is_none());
        assert!(PaymentMethod::from_tag("CreditCard").is_none());
        assert!(PaymentMethod::from_tag("").is_none());
    }

    #[test]
    fn test_field_order_is_fixed() {
        let keys: Vec<_> = PaymentMethod::CreditCard
            .fields()
            .iter()
            .map(|f| f.key)
            .collect();
        assert_eq!(
            keys,
            ["name", "creditCardNumber", "creditCardExpirationDate"]
        );

        let keys: Vec<_> = PaymentMethod::Offline
            .fields()
            .iter()
            .map(|f| f.key)
            .collect();
        assert_eq!(keys, ["name", "billingAddress"]);
    }
}
