//! Rejection taxonomy for the sanitization pipeline.

use std::fmt;

/// Why a candidate line was rejected.
///
/// All rejections are per-line and non-fatal: the run records the error and
/// moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectKind {
    /// Authority parsed to an empty host.
    EmptyHost,
    /// Authority carries `user:password@` credentials, which policy lists
    /// never accept.
    UserInfoNotAllowed,
    /// A hostname label contains a character outside `[A-Za-z0-9-]`.
    /// `None` means the label itself was empty (e.g. `a..b` or a trailing dot).
    InvalidHostnameCharset(Option<char>),
    /// A hostname label starts or ends with `-`.
    InvalidDashPlacement,
    /// Host contains `%`. Percent-encoded hostnames are refused outright;
    /// non-ASCII names must arrive already in punycode.
    PercentEncodingInHost,
    /// Wildcard usage other than a single leading `*.`.
    InvalidWildcardFormat,
    /// Entry cannot be decomposed into host/path at all.
    MalformedEntry(&'static str),
}

impl fmt::Display for RejectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectKind::EmptyHost => write!(f, "empty host"),
            RejectKind::UserInfoNotAllowed => {
                write!(f, "user:password format is not supported")
            }
            RejectKind::InvalidHostnameCharset(Some(c)) => {
                write!(f, "invalid character {:?} in hostname", c)
            }
            RejectKind::InvalidHostnameCharset(None) => {
                write!(f, "empty label in hostname")
            }
            RejectKind::InvalidDashPlacement => {
                write!(f, "hostname label cannot start or end with '-'")
            }
            RejectKind::PercentEncodingInHost => {
                write!(f, "percent-encoding is not allowed in hostnames")
            }
            RejectKind::InvalidWildcardFormat => {
                write!(f, "invalid wildcard format, expected a single leading '*.'")
            }
            RejectKind::MalformedEntry(reason) => write!(f, "malformed entry: {}", reason),
        }
    }
}

/// A rejected input line: where it was, what it said, why it was refused.
/// Never mutated once created; the reporter renders these as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the input.
    pub line_no: usize,
    /// Original line text, trimmed.
    pub raw: String,
    pub kind: RejectKind,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line_no, self.raw, self.kind)
    }
}

impl std::error::Error for LineError {}
