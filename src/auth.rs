//! Signed-in identity. Credentials never reach this module; only the result
//! of signing in does.

use crate::model::initial;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Identity {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            display_name: None,
            avatar_url: None,
        }
    }

    /// Display name when set and non-blank, otherwise the email.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    pub fn avatar_initial(&self) -> String {
        initial(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn identity_mut(&mut self) -> Option<&mut Identity> {
        self.identity.as_mut()
    }

    /// Signs in with the given email. Blank input is ignored and returns false.
    pub fn sign_in(&mut self, email: &str) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        log::info!("event=sign_in status=ok");
        self.identity = Some(Identity::new(email));
        true
    }

    pub fn sign_out(&mut self) {
        log::info!("event=sign_out status=ok");
        self.identity = None;
    }
}
