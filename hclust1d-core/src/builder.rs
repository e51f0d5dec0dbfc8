//! Builder for configuring [`Hclust1d`] runners.
//!
//! Linkage methods can be chosen either as a typed [`LinkageMethod`] or by
//! conventional name. Names are only checked when [`Hclust1dBuilder::build`]
//! runs, so a selector read from user input surfaces its error in one place.

use std::borrow::Cow;

use tracing::warn;

use crate::{LinkageMethod, Result, hclust1d::Hclust1d};

/// Configures and constructs [`Hclust1d`] instances.
///
/// # Examples
/// ```
/// use hclust1d_core::{Hclust1dBuilder, LinkageMethod};
///
/// let runner = Hclust1dBuilder::new()
///     .with_method_name("average")
///     .build()
///     .expect("method name is valid");
/// assert_eq!(runner.method(), LinkageMethod::Average);
/// ```
#[derive(Debug, Clone)]
pub struct Hclust1dBuilder {
    method: Cow<'static, str>,
}

impl Default for Hclust1dBuilder {
    fn default() -> Self {
        Self {
            method: Cow::Borrowed(LinkageMethod::Complete.as_str()),
        }
    }
}

impl Hclust1dBuilder {
    /// Creates a builder that selects complete linkage.
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::Hclust1dBuilder;
    ///
    /// assert_eq!(Hclust1dBuilder::new().method_name(), "complete");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a linkage method.
    #[must_use]
    pub fn with_method(mut self, method: LinkageMethod) -> Self {
        self.method = Cow::Borrowed(method.as_str());
        self
    }

    /// Selects a linkage method by conventional name, such as `"ward.D2"`.
    ///
    /// The name is validated by [`Self::build`].
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::Hclust1dBuilder;
    ///
    /// let builder = Hclust1dBuilder::new().with_method_name("mcquitty");
    /// assert_eq!(builder.method_name(), "mcquitty");
    /// ```
    #[must_use]
    pub fn with_method_name(mut self, name: impl Into<String>) -> Self {
        self.method = Cow::Owned(name.into());
        self
    }

    /// Returns the currently selected method name.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method
    }

    /// Validates the configuration and constructs an [`Hclust1d`] instance.
    ///
    /// # Errors
    /// Returns [`crate::Hclust1dError::UnknownMethod`] when the selected name
    /// is not a recognised linkage method.
    ///
    /// # Examples
    /// ```
    /// use hclust1d_core::{Hclust1dBuilder, Hclust1dErrorCode};
    ///
    /// let err = Hclust1dBuilder::new()
    ///     .with_method_name("ward")
    ///     .build()
    ///     .expect_err("`ward` is ambiguous");
    /// assert_eq!(err.code(), Hclust1dErrorCode::UnknownMethod);
    /// ```
    pub fn build(self) -> Result<Hclust1d> {
        let method = self.method.parse::<LinkageMethod>().inspect_err(|_| {
            warn!(method = %self.method, "unknown linkage method, returning error");
        })?;
        Ok(Hclust1d::new(method))
    }
}
