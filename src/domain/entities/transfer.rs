use thiserror::Error;

/// Validation outcome for a malformed transfer command. The display
/// string is the reply sent back to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTransfer {
    #[error("Usage: /transfer <recipient> <amount>")]
    Usage,

    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
}

/// A validated single-recipient transfer request.
///
/// Invariant: `amount_sol` is finite and strictly positive. The
/// recipient is an opaque address string; chain-specific format checks
/// are left to the RPC node.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount_sol: f64,
}

impl TransferRequest {
    /// Build a request from the raw `/transfer` arguments.
    pub fn from_args(args: &[String]) -> Result<Self, InvalidTransfer> {
        if args.len() != 2 {
            return Err(InvalidTransfer::Usage);
        }

        let amount_sol: f64 = args[1].parse().map_err(|_| InvalidTransfer::Usage)?;
        if !amount_sol.is_finite() || amount_sol <= 0.0 {
            return Err(InvalidTransfer::NonPositiveAmount);
        }

        Ok(Self {
            recipient: args[0].clone(),
            amount_sol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_two_valid_args() {
        let req = TransferRequest::from_args(&args(&["abc123", "1.5"])).unwrap();
        assert_eq!(req.recipient, "abc123");
        assert_eq!(req.amount_sol, 1.5);
    }

    #[test]
    fn rejects_wrong_arg_count() {
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123"])),
            Err(InvalidTransfer::Usage)
        );
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123", "1.5", "extra"])),
            Err(InvalidTransfer::Usage)
        );
        assert_eq!(TransferRequest::from_args(&[]), Err(InvalidTransfer::Usage));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123", "lots"])),
            Err(InvalidTransfer::Usage)
        );
    }

    #[test]
    fn rejects_non_positive_amount() {
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123", "-1"])),
            Err(InvalidTransfer::NonPositiveAmount)
        );
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123", "0"])),
            Err(InvalidTransfer::NonPositiveAmount)
        );
        assert_eq!(
            TransferRequest::from_args(&args(&["abc123", "NaN"])),
            Err(InvalidTransfer::NonPositiveAmount)
        );
    }

    #[test]
    fn usage_text_matches_reply() {
        assert_eq!(
            InvalidTransfer::Usage.to_string(),
            "Usage: /transfer <recipient> <amount>"
        );
        assert_eq!(
            InvalidTransfer::NonPositiveAmount.to_string(),
            "Amount must be greater than 0"
        );
    }
}
