//! The persisted deployment records store.
//!
//! One records file exists per network, holding one entry per aliased
//! contract deployment. Descriptors consult the store before deploying,
//! so re-running a descriptor against the same network reuses the
//! recorded address instead of redeploying.

use std::{
    fs::{self, File},
    io::Read,
    path::Path,
    str::FromStr,
};

use ethers::abi::Address;
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Parses the records file at the given path into a JSON value
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Returns whether a deployment record exists for the given alias
pub fn contains(file_path: &str, alias: &str) -> Result<bool, ScriptError> {
    if !Path::new(file_path).exists() {
        return Ok(false);
    }

    let parsed_json = get_json_from_file(file_path)?;
    Ok(!parsed_json[DEPLOYMENTS_KEY][alias].is_null())
}

/// Reads the recorded address of the given alias from the records file
pub fn read_address(file_path: &str, alias: &str) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(parsed_json[DEPLOYMENTS_KEY][alias].as_str().ok_or_else(
        || {
            ScriptError::ReadDeployments(format!(
                "no deployment record for `{}` in {}",
                alias, file_path
            ))
        },
    )?)
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Records the deployed address of the given alias,
/// creating the records file if it does not yet exist
pub fn write_address(
    file_path: &str,
    alias: &str,
    address: Address,
) -> Result<(), ScriptError> {
    if !Path::new(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][alias] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    //! Tests for the deployment records store

    use ethers::abi::Address;
    use tempfile::tempdir;

    use super::{contains, read_address, write_address};
    use crate::errors::ScriptError;

    /// Writing an address then reading it back returns the same address
    #[test]
    fn test_write_then_read__round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let address = Address::from_low_u64_be(0xdeadbeef);
        write_address(path, "TestToken1", address).unwrap();

        assert_eq!(read_address(path, "TestToken1").unwrap(), address);
    }

    /// `contains` is false before a record is written and true after,
    /// which is what makes descriptor re-runs idempotent
    #[test]
    fn test_contains__tracks_written_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        assert!(!contains(path, "OTCSwap").unwrap());

        write_address(path, "OTCSwap", Address::from_low_u64_be(1)).unwrap();

        assert!(contains(path, "OTCSwap").unwrap());
        assert!(!contains(path, "TestToken1").unwrap());
    }

    /// The first write creates the records file
    #[test]
    fn test_write__creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        assert!(!path.exists());
        write_address(
            path.to_str().unwrap(),
            "TestToken2",
            Address::from_low_u64_be(2),
        )
        .unwrap();
        assert!(path.exists());
    }

    /// Writing a second alias preserves previously recorded entries
    #[test]
    fn test_write__preserves_existing_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let token1 = Address::from_low_u64_be(1);
        let token2 = Address::from_low_u64_be(2);
        write_address(path, "TestToken1", token1).unwrap();
        write_address(path, "TestToken2", token2).unwrap();

        assert_eq!(read_address(path, "TestToken1").unwrap(), token1);
        assert_eq!(read_address(path, "TestToken2").unwrap(), token2);
    }

    /// A malformed records file surfaces a `ReadDeployments` error
    #[test]
    fn test_read__rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        std::fs::write(&path, "not json").unwrap();

        let err = read_address(path.to_str().unwrap(), "TestToken1").unwrap_err();
        assert!(matches!(err, ScriptError::ReadDeployments(_)));
    }

    /// Reading an alias with no record surfaces a `ReadDeployments` error
    #[test]
    fn test_read__rejects_missing_alias() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        write_address(path, "TestToken1", Address::from_low_u64_be(1)).unwrap();

        let err = read_address(path, "Collectionstaker").unwrap_err();
        assert!(matches!(err, ScriptError::ReadDeployments(_)));
    }
}
