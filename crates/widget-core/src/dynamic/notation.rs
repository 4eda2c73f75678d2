//! Notation grammars and their handlers

use super::datefmt::format_date;
use super::NotationContext;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `__NOW[<pattern>]` or `__NOW[numeric]`.
static CURRENT_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__NOW\[(?P<arg>[A-Za-z0-9_\s<>\[\]\\+\-.!?]+)\]")
        .expect("Invalid current time regex")
});

/// `__PROP[<property-name>]`.
static PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__PROP\[(?P<arg>[A-Za-z0-9_.\-]+)\]").expect("Invalid property regex")
});

static SELF_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__SELF").expect("Invalid self path regex"));

static CONTENT_LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__CONTENT_LOCALE").expect("Invalid content locale regex"));

/// Computes the replacement for one notation occurrence.
///
/// The argument is the `arg` capture, present for every match of a
/// bracketed grammar.
type Handler = fn(Option<&str>, &NotationContext<'_>) -> Result<String>;

/// The kinds of dynamic-value notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationKind {
    /// `__NOW[...]` - the current time
    CurrentTime,
    /// `__PROP[...]` - a property of the edited resource
    Property,
    /// `__SELF` - root path of the edited resource
    SelfPath,
    /// `__CONTENT_LOCALE` - the content locale, same as `__PROP[locale]`
    /// on most resources
    ContentLocale,
}

impl NotationKind {
    /// Kinds with bracketed arguments come before the bare tokens.
    pub const EVALUATION_ORDER: [NotationKind; 4] = [
        NotationKind::CurrentTime,
        NotationKind::Property,
        NotationKind::SelfPath,
        NotationKind::ContentLocale,
    ];

    /// The literal prefix of the notation, e.g. `__NOW`.
    pub fn prefix(self) -> &'static str {
        match self {
            NotationKind::CurrentTime => "__NOW",
            NotationKind::Property => "__PROP",
            NotationKind::SelfPath => "__SELF",
            NotationKind::ContentLocale => "__CONTENT_LOCALE",
        }
    }

    /// The compiled grammar. Argument-taking kinds capture it as `arg`.
    pub fn regex(self) -> &'static Regex {
        match self {
            NotationKind::CurrentTime => &CURRENT_TIME_REGEX,
            NotationKind::Property => &PROPERTY_REGEX,
            NotationKind::SelfPath => &SELF_PATH_REGEX,
            NotationKind::ContentLocale => &CONTENT_LOCALE_REGEX,
        }
    }

    fn handler(self) -> Handler {
        match self {
            NotationKind::CurrentTime => current_time,
            NotationKind::Property => property_value,
            NotationKind::SelfPath => self_path,
            NotationKind::ContentLocale => content_locale,
        }
    }

    /// Compute the replacement for one occurrence.
    pub fn evaluate(self, argument: Option<&str>, ctx: &NotationContext<'_>) -> Result<String> {
        (self.handler())(argument, ctx)
    }
}

/// Epoch milliseconds for `numeric`, otherwise the formatted time.
///
/// A malformed pattern is logged and falls back to epoch milliseconds.
fn current_time(argument: Option<&str>, ctx: &NotationContext<'_>) -> Result<String> {
    let pattern = argument.unwrap_or_default();
    let now = (ctx.clock)();
    let numeric = now.timestamp_millis().to_string();
    if pattern.eq_ignore_ascii_case("numeric") {
        return Ok(numeric);
    }
    match format_date(&now, pattern, ctx.resource.locale()) {
        Ok(formatted) => Ok(formatted),
        Err(e) => {
            tracing::error!(%pattern, error = %e, "Error formatting current time");
            Ok(numeric)
        }
    }
}

/// The property value, searching ancestor folders.
///
/// An undefined property is an error, so the notation stays visible in
/// the output. A defined but unset property yields the placeholder text,
/// except for the locale property, which falls back to the host's default
/// locale for the resource.
fn property_value(argument: Option<&str>, ctx: &NotationContext<'_>) -> Result<String> {
    let name = argument.unwrap_or_default();
    if !ctx.host.property_defined(name)? {
        return Err(Error::UndefinedProperty {
            name: name.to_string(),
        });
    }
    let resource = ctx.resource.root_path();
    match ctx.host.read_property(resource, name, true)? {
        Some(value) => Ok(value),
        None if name == ctx.settings.locale_property => {
            Ok(ctx.host.default_locale(resource)?.to_string())
        }
        None => Ok(ctx.settings.no_property_value.clone()),
    }
}

fn self_path(_: Option<&str>, ctx: &NotationContext<'_>) -> Result<String> {
    Ok(ctx.resource.root_path().to_string())
}

fn content_locale(_: Option<&str>, ctx: &NotationContext<'_>) -> Result<String> {
    Ok(ctx.resource.locale().to_string())
}
