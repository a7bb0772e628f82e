//! Prompt contract and input value semantics.
//!
//! The terminal UI lives in the binary; feature modules only see the
//! [`Prompter`] trait. The helpers here own the rules for what a valid
//! number, percent or label looks like, and those same rules are applied
//! again when a saved config is loaded.

use crate::address_book::AssetRegistry;
use crate::config::EModeCategoryId;
use crate::error::{GenError, GenResult};
use crate::pool::Pool;

/// Validator applied to every answer; `Err` carries the message shown
/// before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Interactive question asking.
///
/// Implementations must re-ask until `validate` accepts the answer, so
/// validation failures never reach the caller.
pub trait Prompter {
    /// Ask for a line of text.
    fn input(&mut self, message: &str, validate: Validator<'_>) -> GenResult<String>;

    /// Let the user pick any subset of `choices`. Returns indices in
    /// ascending order. With `required`, at least one must be picked.
    fn multi_select(&mut self, message: &str, choices: &[String], required: bool) -> GenResult<Vec<usize>>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> GenResult<bool>;
}

/// Mark a prompt message as mandatory.
pub fn flag_as_required(message: &str, required: bool) -> String {
    if required {
        format!("{}*", message)
    } else {
        message.to_string()
    }
}

/// Whole-number input: digits with optional `_` separators, or empty to keep current.
pub fn check_number(value: &str, required: bool) -> Result<(), String> {
    if value.is_empty() {
        return if required {
            Err("This field is required".to_string())
        } else {
            Ok(())
        };
    }
    let well_formed = value.starts_with(|c: char| c.is_ascii_digit())
        && !value.ends_with('_')
        && !value.contains("__")
        && value.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(format!("'{}' is not a whole number", value));
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(format!("'{}' has leading zeros", value));
    }
    Ok(())
}

/// Percent input: a number with at most two decimals, or empty to keep current.
pub fn check_percent(value: &str, required: bool) -> Result<(), String> {
    if value.is_empty() {
        return if required {
            Err("This field is required".to_string())
        } else {
            Ok(())
        };
    }
    let (int, frac) = match value.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (value, None),
    };
    if int.is_empty() || !int.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("'{}' is not a valid percentage", value));
    }
    if int.len() > 1 && int.starts_with('0') {
        return Err(format!("'{}' has leading zeros", value));
    }
    if let Some(frac) = frac {
        if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("'{}' is not a valid percentage", value));
        }
        if frac.len() > 2 {
            return Err("Maximum of 2 decimals".to_string());
        }
    }
    Ok(())
}

/// Group digits in thousands with `_` (`10000` → `10_000`).
pub fn human_readable(value: &str) -> String {
    let digits: String = value.chars().filter(|c| *c != '_').collect();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (ix, c) in digits.chars().enumerate() {
        if ix > 0 && (len - ix) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}

/// Ask for a whole number. Unless `skip_transform`, the answer is stored
/// with thousands separators.
pub fn number_prompt(
    prompter: &mut dyn Prompter,
    message: &str,
    required: bool,
    skip_transform: bool,
) -> GenResult<String> {
    let validate = |v: &str| check_number(v.trim(), required);
    let value = prompter
        .input(&flag_as_required(message, required), &validate)?
        .trim()
        .to_string();
    if value.is_empty() || skip_transform {
        Ok(value)
    } else {
        Ok(human_readable(&value))
    }
}

/// Ask for a percentage in human units (`10.64` means 10.64%).
pub fn percent_prompt(prompter: &mut dyn Prompter, message: &str, required: bool) -> GenResult<String> {
    let validate = |v: &str| check_percent(v.trim(), required);
    let value = prompter.input(&flag_as_required(message, required), &validate)?;
    Ok(value.trim().to_string())
}

/// Ask for free text.
pub fn string_prompt(prompter: &mut dyn Prompter, message: &str, required: bool) -> GenResult<String> {
    let validate = |v: &str| {
        if required && v.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    };
    let value = prompter.input(&flag_as_required(message, required), &validate)?;
    Ok(value.trim().to_string())
}

/// Pick one or more assets listed for `pool`.
pub fn assets_select(
    prompter: &mut dyn Prompter,
    registry: &dyn AssetRegistry,
    pool: Pool,
    message: &str,
) -> GenResult<Vec<String>> {
    let assets = registry.assets(pool);
    if assets.is_empty() {
        return Err(GenError::Config(format!("no assets listed for {}", pool)));
    }
    let picked = prompter.multi_select(message, &assets, true)?;
    picked
        .into_iter()
        .map(|ix| {
            assets
                .get(ix)
                .cloned()
                .ok_or_else(|| GenError::prompt(format!("selection {} out of range", ix)))
        })
        .collect()
}

/// Pick any number of eMode categories for `pool`, returned as address-book constants.
pub fn emodes_select(
    prompter: &mut dyn Prompter,
    registry: &dyn AssetRegistry,
    pool: Pool,
    message: &str,
) -> GenResult<Vec<EModeCategoryId>> {
    let emodes = registry.emodes(pool);
    if emodes.is_empty() {
        return Ok(Vec::new());
    }
    let labels: Vec<String> = emodes.iter().map(|e| e.label.clone()).collect();
    let picked = prompter.multi_select(message, &labels, false)?;
    picked
        .into_iter()
        .map(|ix| {
            emodes
                .get(ix)
                .map(|e| EModeCategoryId::Constant(format!("{}EModes.{}", pool, e.constant_name())))
                .ok_or_else(|| GenError::prompt(format!("selection {} out of range", ix)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address_book::AddressBook;
    use crate::test_support::ScriptedPrompter;

    #[test]
    fn test_check_number() {
        assert!(check_number("", false).is_ok());
        assert!(check_number("", true).is_err());
        assert!(check_number("10000", true).is_ok());
        assert!(check_number("10_000", true).is_ok());
        assert!(check_number("_10", true).is_err());
        assert!(check_number("10_", true).is_err());
        assert!(check_number("1.5", true).is_err());
        assert!(check_number("abc", false).is_err());
        assert!(check_number("0", true).is_ok());
        assert!(check_number("010", true).is_err());
        assert!(check_number("0_100", true).is_err());
    }

    #[test]
    fn test_check_percent() {
        assert!(check_percent("", false).is_ok());
        assert!(check_percent("", true).is_err());
        assert!(check_percent("10", true).is_ok());
        assert!(check_percent("10.64", true).is_ok());
        assert!(check_percent("10.6", true).is_ok());
        assert_eq!(check_percent("10.645", true), Err("Maximum of 2 decimals".to_string()));
        assert!(check_percent("10.", true).is_err());
        assert!(check_percent(".5", true).is_err());
        assert!(check_percent("-1", true).is_err());
        assert!(check_percent("0.5", true).is_ok());
        assert!(check_percent("05", true).is_err());
        assert!(check_percent("00.5", true).is_err());
    }

    #[test]
    fn test_human_readable() {
        assert_eq!(human_readable("100"), "100");
        assert_eq!(human_readable("1000"), "1_000");
        assert_eq!(human_readable("10000"), "10_000");
        assert_eq!(human_readable("1234567"), "1_234_567");
        assert_eq!(human_readable("1_0000"), "10_000");
    }

    #[test]
    fn test_number_prompt_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new().answer("ten").answer("10000");
        let value = number_prompt(&mut prompter, "Supply cap", false, false).unwrap();
        assert_eq!(value, "10_000");
        assert_eq!(prompter.rejected(), 1);
    }

    #[test]
    fn test_number_prompt_skip_transform_and_empty() {
        let mut prompter = ScriptedPrompter::new().answer("1723621200").answer("");
        assert_eq!(
            number_prompt(&mut prompter, "Snapshot Timestamp", true, true).unwrap(),
            "1723621200"
        );
        assert_eq!(number_prompt(&mut prompter, "Borrow cap", false, false).unwrap(), "");
    }

    #[test]
    fn test_required_prompt_rejects_empty() {
        let mut prompter = ScriptedPrompter::new().answer("").answer("10.64");
        let value = percent_prompt(&mut prompter, "Max Yearly Ratio Growth Percent", true).unwrap();
        assert_eq!(value, "10.64");
        assert_eq!(prompter.rejected(), 1);
        assert_eq!(prompter.messages()[0], "Max Yearly Ratio Growth Percent*");
    }

    #[test]
    fn test_exhausted_script_is_an_error() {
        let mut prompter = ScriptedPrompter::new();
        assert!(string_prompt(&mut prompter, "label", false).is_err());
    }

    #[test]
    fn test_assets_select_maps_indices() {
        let book = AddressBook::default();
        let assets = book.assets(Pool::AaveV3Ethereum);
        let weth = assets.iter().position(|a| a == "WETH").unwrap();
        let mut prompter = ScriptedPrompter::new().select(vec![weth]);
        let picked = assets_select(&mut prompter, &book, Pool::AaveV3Ethereum, "Select").unwrap();
        assert_eq!(picked, vec!["WETH".to_string()]);
    }

    #[test]
    fn test_emodes_select_allows_empty() {
        let book = AddressBook::default();
        let mut prompter = ScriptedPrompter::new().select(vec![]);
        let picked = emodes_select(&mut prompter, &book, Pool::AaveV3Ethereum, "Select").unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn test_emodes_select_returns_constants() {
        let book = AddressBook::default();
        let mut prompter = ScriptedPrompter::new().select(vec![0]);
        let picked = emodes_select(&mut prompter, &book, Pool::AaveV3Ethereum, "Select").unwrap();
        assert_eq!(
            picked,
            vec![EModeCategoryId::Constant("AaveV3EthereumEModes.ETH_CORRELATED".to_string())]
        );
    }
}
