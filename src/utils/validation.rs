//! Input validation utilities

use crate::constants;

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if (password.len() as u64) < constants::MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    if (password.len() as u64) > constants::MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate match status
pub fn validate_match_status(status: &str) -> Result<(), &'static str> {
    if constants::match_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid match status")
    }
}

/// Validate match type
pub fn validate_match_type(match_type: &str) -> Result<(), &'static str> {
    if constants::match_types::ALL.contains(&match_type) {
        Ok(())
    } else {
        Err("Invalid match type")
    }
}

/// Validate team type
pub fn validate_team_type(team_type: &str) -> Result<(), &'static str> {
    if constants::team_types::ALL.contains(&team_type) {
        Ok(())
    } else {
        Err("Invalid team type")
    }
}

/// Validate comment reaction type
pub fn validate_reaction_type(reaction: &str) -> Result<(), &'static str> {
    if constants::reactions::ALL.contains(&reaction) {
        Ok(())
    } else {
        Err("Invalid reaction type")
    }
}

/// Validate a predicted score component
pub fn validate_goal_count(goals: i32) -> Result<(), &'static str> {
    if goals < 0 {
        return Err("Scores cannot be negative");
    }
    if goals > constants::MAX_PREDICTED_GOALS {
        return Err("Score exceeds the maximum accepted value");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("fan@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("fan@nodot").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough1").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("user").is_ok());
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("seed").is_ok());
        assert!(validate_role("superuser").is_err());
    }

    #[test]
    fn test_validate_goal_count() {
        assert!(validate_goal_count(0).is_ok());
        assert!(validate_goal_count(99).is_ok());
        assert!(validate_goal_count(-1).is_err());
        assert!(validate_goal_count(100).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0000} world  "), "hello world");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
