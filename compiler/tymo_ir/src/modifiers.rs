//! Declaration modifiers.
//!
//! Two representations:
//! - [`Modifier`]: a single source-level keyword (`public`, `abstract`, ...)
//! - [`Modifiers`]: a compact set of keywords, stored on definitions,
//!   properties, and methods
//!
//! [`modifiers_to_int`] encodes a set of keywords as target-VM access flags
//! (the constants in [`access`]).

use bitflags::bitflags;

/// Target-VM access flag constants.
///
/// Values match the class-file format, so the result of
/// [`modifiers_to_int`] can be written straight into emitted bytecode.
pub mod access {
    pub const PUBLIC: u32 = 0x0001;
    pub const PRIVATE: u32 = 0x0002;
    pub const PROTECTED: u32 = 0x0004;
    pub const STATIC: u32 = 0x0008;
    pub const FINAL: u32 = 0x0010;
    pub const SYNCHRONIZED: u32 = 0x0020;
    pub const VOLATILE: u32 = 0x0040;
    pub const TRANSIENT: u32 = 0x0080;
    pub const NATIVE: u32 = 0x0100;
    pub const INTERFACE: u32 = 0x0200;
    pub const ABSTRACT: u32 = 0x0400;
    pub const STRICT: u32 = 0x0800;
}

/// A single declaration modifier keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    /// `default` on interface methods.
    Default,
    Static,
    Sealed,
    NonSealed,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Every modifier, in declaration order.
    pub const ALL: [Modifier; 14] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Default,
        Modifier::Static,
        Modifier::Sealed,
        Modifier::NonSealed,
        Modifier::Final,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Synchronized,
        Modifier::Native,
        Modifier::Strictfp,
    ];

    /// Source keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// Parse a source keyword. Returns `None` for anything else.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.keyword() == keyword)
    }

    /// The set containing only this modifier.
    pub const fn flag(self) -> Modifiers {
        match self {
            Modifier::Public => Modifiers::PUBLIC,
            Modifier::Protected => Modifiers::PROTECTED,
            Modifier::Private => Modifiers::PRIVATE,
            Modifier::Abstract => Modifiers::ABSTRACT,
            Modifier::Default => Modifiers::DEFAULT,
            Modifier::Static => Modifiers::STATIC,
            Modifier::Sealed => Modifiers::SEALED,
            Modifier::NonSealed => Modifiers::NON_SEALED,
            Modifier::Final => Modifiers::FINAL,
            Modifier::Transient => Modifiers::TRANSIENT,
            Modifier::Volatile => Modifiers::VOLATILE,
            Modifier::Synchronized => Modifiers::SYNCHRONIZED,
            Modifier::Native => Modifiers::NATIVE,
            Modifier::Strictfp => Modifiers::STRICTFP,
        }
    }
}

bitflags! {
    /// A set of declaration modifiers.
    ///
    /// The bit layout is internal; use [`Modifiers::access_flags`] for the
    /// target-VM encoding.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const ABSTRACT = 1 << 3;
        const DEFAULT = 1 << 4;
        const STATIC = 1 << 5;
        const SEALED = 1 << 6;
        const NON_SEALED = 1 << 7;
        const FINAL = 1 << 8;
        const TRANSIENT = 1 << 9;
        const VOLATILE = 1 << 10;
        const SYNCHRONIZED = 1 << 11;
        const NATIVE = 1 << 12;
        const STRICTFP = 1 << 13;
    }
}

impl Modifiers {
    /// Iterate over the keywords in this set, in [`Modifier::ALL`] order.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |m| self.contains(m.flag()))
    }

    /// Target-VM access flags for this set.
    pub fn access_flags(self) -> u32 {
        modifiers_to_int(self.modifiers())
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    #[inline]
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        modifier.flag()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Modifiers::empty(), |acc, m| acc | m.flag())
    }
}

/// Fold modifier keywords into target-VM access flags.
///
/// Only `abstract`, `final`, `native`, `private`, `protected`, `public`,
/// `static`, `synchronized`, and `transient` contribute. Other keywords are
/// ignored, so callers can pass any modifier list without filtering it first.
/// The result does not depend on input order or duplicates.
pub fn modifiers_to_int<I>(modifiers: I) -> u32
where
    I: IntoIterator<Item = Modifier>,
{
    modifiers.into_iter().fold(0, |acc, m| {
        acc | match m {
            Modifier::Abstract => access::ABSTRACT,
            Modifier::Final => access::FINAL,
            Modifier::Native => access::NATIVE,
            Modifier::Private => access::PRIVATE,
            Modifier::Protected => access::PROTECTED,
            Modifier::Public => access::PUBLIC,
            Modifier::Static => access::STATIC,
            Modifier::Synchronized => access::SYNCHRONIZED,
            Modifier::Transient => access::TRANSIENT,
            Modifier::Default
            | Modifier::Sealed
            | Modifier::NonSealed
            | Modifier::Volatile
            | Modifier::Strictfp => 0,
        }
    })
}

#[cfg(test)]
mod tests;
