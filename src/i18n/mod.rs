// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. The language is picked
//! from the CLI, then the config file, then the OS locale, with en-US as the
//! fallback.

pub mod fluent;

pub use fluent::I18n;
