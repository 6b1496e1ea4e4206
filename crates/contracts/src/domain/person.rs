use serde::{Deserialize, Serialize};

/// Team member card on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: String,
    pub affiliation: String,
    pub email: String,
    /// Portrait; cards fall back to the first letter of the name when absent
    pub image_ref: Option<String>,
    #[serde(default)]
    pub achievements: String,
}

impl Person {
    /// Letter used for the placeholder avatar
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<Person>,
    pub supervisor: Supervisor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            role: "Engineer".to_string(),
            affiliation: "Water360".to_string(),
            email: "someone@example.com".to_string(),
            image_ref: None,
            achievements: String::new(),
        }
    }

    #[test]
    fn test_initial() {
        assert_eq!(person("jane Smith").initial(), 'J');
        assert_eq!(person("  Dr. Wilson").initial(), 'D');
        assert_eq!(person("").initial(), '?');
    }

    #[test]
    fn test_mailto() {
        assert_eq!(person("x").mailto(), "mailto:someone@example.com");
    }
}
