//! Package manager detection and post-creation guidance

/// Package manager name from a `name/version ...` user agent
///
/// Returns `None` when the user agent is absent or has no name part.
pub fn package_manager_from_user_agent(user_agent: Option<&str>) -> Option<&str> {
    let product = user_agent?.split(' ').next()?;
    let name = product.split('/').next()?;
    (!name.is_empty()).then_some(name)
}

/// Package manager label, falling back to `default` when detection fails
pub fn package_manager_label<'a>(user_agent: Option<&'a str>, default: &'a str) -> &'a str {
    package_manager_from_user_agent(user_agent).unwrap_or(default)
}

/// Command that installs dependencies
pub fn install_command(package_manager: &str) -> String {
    if package_manager == "yarn" {
        "yarn".to_string()
    } else {
        format!("{} install", package_manager)
    }
}

/// Command that runs a package script
pub fn run_script_command(package_manager: &str, script: &str) -> String {
    if package_manager == "yarn" {
        format!("yarn {}", script)
    } else {
        format!("{} run {}", package_manager, script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_manager_from_user_agent() {
        assert_eq!(
            package_manager_from_user_agent(Some("npm/10.2.4 node/v20.11.0 darwin arm64")),
            Some("npm")
        );
        assert_eq!(
            package_manager_from_user_agent(Some("pnpm/9.1.0 npm/? node/v20.11.0")),
            Some("pnpm")
        );
        assert_eq!(package_manager_from_user_agent(Some("yarn")), Some("yarn"));
    }

    #[test]
    fn test_malformed_user_agent_falls_back() {
        assert_eq!(package_manager_label(None, "pnpm"), "pnpm");
        assert_eq!(package_manager_label(Some(""), "pnpm"), "pnpm");
        assert_eq!(package_manager_label(Some(" npm/10"), "pnpm"), "pnpm");
        assert_eq!(package_manager_label(Some("/1.0.0"), "pnpm"), "pnpm");
    }

    #[test]
    fn test_commands_per_package_manager() {
        assert_eq!(install_command("yarn"), "yarn");
        assert_eq!(install_command("pnpm"), "pnpm install");
        assert_eq!(run_script_command("yarn", "dev:master"), "yarn dev:master");
        assert_eq!(run_script_command("npm", "dev:master"), "npm run dev:master");
    }
}
