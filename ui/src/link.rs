//! Building the `upi://pay` deep link from the form fields.

use thiserror::Error;

/// Scheme-and-path prefix shared by every generated link.
pub const UPI_PAY_PREFIX: &str = "upi://pay";

/// An error that can occur when building a payment link.
///
/// The `Display` text doubles as the user-facing notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The payee field was empty when the link was requested.
    #[error("Please enter UPI ID")]
    EmptyPayee,
}

/// A generated UPI payment link.
///
/// Holds the inputs it was derived from alongside the URI so the pay pane
/// can show a "you are paying X to Y" summary. A new link replaces any
/// prior one; nothing is persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpiLink {
    payee_id: String,
    amount: String,
    uri: String,
}

impl UpiLink {
    /// Builds a link from the raw form fields.
    ///
    /// The only validated condition is an empty payee. Both fields are
    /// interpolated into the URI verbatim: no percent-encoding, no VPA
    /// syntax check, no numeric check on the amount. UPI apps expect plain
    /// `name@bank` payee ids and the wire format must stay bit-exact, so
    /// cleaning up the input is left to the caller.
    pub fn build(payee_id: &str, amount: &str) -> Result<Self, LinkError> {
        if payee_id.is_empty() {
            return Err(LinkError::EmptyPayee);
        }
        let uri = if amount.is_empty() {
            format!("{UPI_PAY_PREFIX}?pa={payee_id}")
        } else {
            format!("{UPI_PAY_PREFIX}?pa={payee_id}&am={amount}")
        };
        Ok(Self {
            payee_id: payee_id.to_owned(),
            amount: amount.to_owned(),
            uri,
        })
    }

    /// The full `upi://pay?...` URI. This exact string is what gets encoded
    /// in the QR code, written to the clipboard and navigated to.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The payee VPA the link was built for.
    pub fn payee_id(&self) -> &str {
        &self.payee_id
    }

    /// The amount as the user entered it, or `None` when left blank.
    pub fn amount(&self) -> Option<&str> {
        if self.amount.is_empty() {
            None
        } else {
            Some(&self.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payee_only_link() {
        let link = UpiLink::build("bob@upi", "").unwrap();
        assert_eq!(link.uri(), "upi://pay?pa=bob@upi");
        assert_eq!(link.payee_id(), "bob@upi");
        assert_eq!(link.amount(), None);
    }

    #[test]
    fn payee_and_amount_link() {
        let link = UpiLink::build("alice@upi", "250").unwrap();
        assert_eq!(link.uri(), "upi://pay?pa=alice@upi&am=250");
        assert_eq!(link.amount(), Some("250"));
    }

    #[test]
    fn empty_payee_is_rejected_even_with_amount() {
        assert_eq!(UpiLink::build("", "100"), Err(LinkError::EmptyPayee));
        assert_eq!(UpiLink::build("", ""), Err(LinkError::EmptyPayee));
    }

    #[test]
    fn inputs_are_interpolated_verbatim() {
        // No escaping or validation happens on either field.
        let link = UpiLink::build("odd name&co@bank", "12.50").unwrap();
        assert_eq!(link.uri(), "upi://pay?pa=odd name&co@bank&am=12.50");

        let link = UpiLink::build("carol@upi", "not-a-number").unwrap();
        assert_eq!(link.uri(), "upi://pay?pa=carol@upi&am=not-a-number");
    }

    #[test]
    fn uri_concatenation_matches_prefix_rule() {
        for payee in ["a", "alice@upi", "x y z"] {
            let plain = UpiLink::build(payee, "").unwrap();
            assert_eq!(plain.uri(), format!("upi://pay?pa={payee}"));
            let priced = UpiLink::build(payee, "42").unwrap();
            assert_eq!(priced.uri(), format!("upi://pay?pa={payee}&am=42"));
        }
    }

    #[test]
    fn error_text_is_the_user_notice() {
        assert_eq!(LinkError::EmptyPayee.to_string(), "Please enter UPI ID");
    }
}
