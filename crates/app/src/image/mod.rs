// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use thiserror::Error;

use timetoeat_core::ResourceLocator;

/// Recoverable failures of an image selection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickImageError {
    /// Access to the media library has not been granted.
    #[error("permission denied")]
    PermissionDenied,

    /// The selection failed and might succeed when retried.
    #[error("picker failed")]
    PickerFailed,
}

/// Outcome of an image selection.
///
/// `Ok(None)` if the user cancelled the selection.
pub type PickImageResult = Result<Option<ResourceLocator>, PickImageError>;

/// Lets the user select an image from an external source, e.g.
/// the photo library of the device.
///
/// The selection completes at an arbitrary later point in time and
/// cannot be cancelled by the application.
pub trait ImagePicker {
    fn request_image(&self) -> impl Future<Output = PickImageResult> + Send;
}
