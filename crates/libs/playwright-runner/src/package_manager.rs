//! Supported JavaScript package managers.

use std::{fmt, str::FromStr};

use crate::prelude::*;

/// Package manager used to install dependencies and launch Playwright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
}

impl PackageManager {
    /// Program that runs `install`.
    pub fn install_tool(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Program that runs a locally installed package binary.
    pub fn shim(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx",
            PackageManager::Pnpm => "pnpx",
        }
    }
}

impl TryFrom<&str> for PackageManager {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            _ => Err(Error::InvalidPackageManager(String::from(value))),
        }
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PackageManager::try_from(s)
    }
}

impl From<PackageManager> for &'static str {
    fn from(value: PackageManager) -> Self {
        value.install_tool()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.install_tool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_manager_has_its_own_shim() {
        assert_eq!(PackageManager::Npm.shim(), "npx");
        assert_eq!(PackageManager::Pnpm.shim(), "pnpx");
        assert_eq!(PackageManager::Npm.install_tool(), "npm");
        assert_eq!(PackageManager::Pnpm.install_tool(), "pnpm");
    }

    #[test]
    fn parse_known_names_only() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!("pnpm".parse::<PackageManager>().unwrap(), PackageManager::Pnpm);
        for name in ["yarn", "PNPM", "", "bun"] {
            assert!(matches!(
                name.parse::<PackageManager>(),
                Err(Error::InvalidPackageManager(_))
            ));
        }
    }

    #[test]
    fn display_matches_tool() {
        assert_eq!(PackageManager::Pnpm.to_string(), "pnpm");
        let name: &str = PackageManager::Npm.into();
        assert_eq!(name, "npm");
    }
}
