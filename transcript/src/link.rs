//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use thiserror::Error;
use tracing::debug;

/// Link opening errors
#[derive(Debug, Error)]
pub enum LinkError {
    /// Nothing to open
    #[error("Empty URI")]
    EmptyUri,

    /// The platform opener could not be started
    #[error("Failed to launch opener: {0}")]
    Launch(#[from] std::io::Error),
}

/// Hands a resolved URI to whatever displays it.
pub trait LinkOpener {
    /// Opens `uri`.
    fn open(&self, uri: &str) -> Result<(), LinkError>;
}

impl<F> LinkOpener for F
where
    F: Fn(&str) -> Result<(), LinkError>,
{
    fn open(&self, uri: &str) -> Result<(), LinkError> {
        self(uri)
    }
}

/// Opens links with the platform's default handler.
///
/// Delegates to the `open` crate, which calls `ShellExecuteW` on Windows and
/// the desktop opener elsewhere. The URI is passed as a single argument and
/// never reaches a command interpreter. The launch is detached and reaped by
/// the crate, so no child process is left behind.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<(), LinkError> {
        launch_with(uri, |uri| open::that_detached(uri))
    }
}

/// Rejects blank URIs, then hands `uri` unchanged to `launch`.
fn launch_with<F>(uri: &str, launch: F) -> Result<(), LinkError>
where
    F: FnOnce(&str) -> std::io::Result<()>,
{
    if uri.trim().is_empty() {
        return Err(LinkError::EmptyUri);
    }
    launch(uri)?;
    debug!(uri, "launched link opener");
    Ok(())
}
