use std::{str::FromStr, sync::LazyLock};

use lettre::address::AddressError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest address accepted by the contact form (RFC 5321 path limit).
pub const EMAIL_ADDRESS_MAX_LEN: usize = 254;

static TLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{L}{2,63}|xn--[a-z0-9-]{1,59})$").unwrap());

/// A syntactically valid, normalized email address.
///
/// Parsing trims the input, validates it and canonicalizes it: the address is
/// lowercased and provider specific sub-addressing (e.g. `+tag` for Gmail) is
/// removed, so that two spellings of the same mailbox compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailAddressError {
    #[error("The email address is too long.")]
    TooLong,
    #[error("The email address domain has no valid top-level domain.")]
    Domain,
    #[error(transparent)]
    Syntax(#[from] AddressError),
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> lettre::Address {
        self.0
    }
}

impl EmailAddressWithName {
    pub fn into_mailbox(self) -> lettre::message::Mailbox {
        self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() > EMAIL_ADDRESS_MAX_LEN {
            return Err(EmailAddressError::TooLong);
        }

        let address = s.parse::<lettre::Address>()?;
        if !has_valid_tld(address.domain()) {
            return Err(EmailAddressError::Domain);
        }

        normalize(&address).map(Self).map_err(Into::into)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

fn has_valid_tld(domain: &str) -> bool {
    // ip literals like `[127.0.0.1]` have no tld
    if domain.starts_with('[') {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| TLD_REGEX.is_match(&tld.to_lowercase()))
}

fn normalize(address: &lettre::Address) -> Result<lettre::Address, AddressError> {
    let user = address.user().to_lowercase();
    let domain = address.domain().to_lowercase();

    let (user, domain) = match domain.as_str() {
        "gmail.com" | "googlemail.com" => (
            strip_subaddress(&user, '+').replace('.', ""),
            "gmail.com".to_owned(),
        ),
        "outlook.com" | "hotmail.com" | "live.com" | "icloud.com" | "me.com" | "mac.com" => {
            (strip_subaddress(&user, '+').to_owned(), domain)
        }
        "yahoo.com" | "ymail.com" | "rocketmail.com" => {
            (strip_subaddress(&user, '-').to_owned(), domain)
        }
        _ => (user, domain),
    };

    lettre::Address::new(user, domain)
}

fn strip_subaddress(user: &str, separator: char) -> &str {
    match user.split_once(separator) {
        Some((base, _)) if !base.is_empty() => base,
        _ => user,
    }
}
