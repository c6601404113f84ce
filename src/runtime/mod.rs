//! Runtime modules for the privileged side of the bridge.
//!
//! The runtime domain owns the dialog gateway, the file codec, the generic
//! operation executor, the menu-intent hub, and the host window anchor.

pub mod bridge;
pub mod codec;
pub mod dialog;
pub mod notify;
pub mod window;
