// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Trim a string, reusing the allocation of an owned string if possible.
pub fn trim_from(s: impl AsRef<str> + Into<String>) -> String {
    let trimmed = s.as_ref().trim();
    if trimmed.len() == s.as_ref().len() {
        return s.into();
    }
    trimmed.to_owned()
}

pub fn non_empty_from(s: impl AsRef<str> + Into<String>) -> Option<String> {
    if s.as_ref().is_empty() {
        None
    } else {
        Some(s.into())
    }
}

pub fn trimmed_non_empty_from(s: impl AsRef<str> + Into<String>) -> Option<String> {
    non_empty_from(trim_from(s))
}

/// Compare two strings character-wise after converting both to lowercase.
///
/// Leading and trailing whitespace is ignored.
#[must_use]
pub fn eq_trimmed_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(rhs.trim().chars().flat_map(char::to_lowercase))
}
