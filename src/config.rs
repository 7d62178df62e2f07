//! Build-time configuration for the campaign page.
//!
//! DESIGN
//! ======
//! The remote endpoint URL is baked in at compile time, the same way the
//! original deployment injected it through the build environment. Absence is
//! a typed state rather than an empty-string sentinel, so every remote
//! operation can refuse to run instead of firing a request at `""`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::Error;

/// Remote endpoint location, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Fully qualified URL of the registration service.
    Url(String),
    /// No URL was provided at build time; all remote operations are disabled
    /// and surface a configuration error instead of attempting a call.
    Unconfigured,
}

impl Endpoint {
    /// Resolve from the `LUCKYDRAW_ENDPOINT_URL` compile-time environment
    /// variable.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("LUCKYDRAW_ENDPOINT_URL"))
    }

    /// Build from an optional raw value; blank strings count as unset.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Url(url.to_owned()),
            _ => Self::Unconfigured,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Base URL for request building.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unconfigured`] when no URL was baked in.
    pub fn url(&self) -> Result<&str, Error> {
        match self {
            Self::Url(url) => Ok(url),
            Self::Unconfigured => Err(Error::Unconfigured),
        }
    }
}

/// Campaign copy and the finite product/branch option set printed on bills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    /// Headline shown above the registration card.
    pub title: &'static str,
    /// Branch options a registrant picks from; an empty set disables the
    /// selector and makes the product field optional.
    pub product_options: &'static [&'static str],
}

impl Campaign {
    /// A product choice is required whenever the campaign configures options.
    #[must_use]
    pub fn product_required(&self) -> bool {
        !self.product_options.is_empty()
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            title: "ส.เจริญหลังคาเหล็กทุกบิลลุ้นรางวัล",
            product_options: &["น้ำโสม", "กลางใหญ่"],
        }
    }
}
