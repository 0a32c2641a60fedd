//! Built-in triggers: each one binds a well-known system directory to the
//! external maintenance tool that re-derives its cache or registration.
//!
//! [`builtin_registry`] assembles them in the canonical order — structural
//! triggers (users, tmpfiles, linker, kernel) before desktop-facing caches.
//! Triggers are written to be independent; the order only fixes which runs
//! first, not a dependency graph.

mod desktop;
mod fonts;
mod icons;
mod kernel;
mod linker;
mod systemd;

pub use desktop::{DesktopDatabase, GlibSchemas, MimeDatabase};
pub use fonts::FontCache;
pub use icons::IconCaches;
pub use kernel::Depmod;
pub use linker::Ldconfig;
pub use systemd::{Hwdb, Sysusers, Tmpfiles};

use postrun_core::{RegistryError, TriggerRegistry};

/// The full built-in trigger set, in execution order.
pub fn builtin_registry() -> Result<TriggerRegistry, RegistryError> {
    let mut registry = TriggerRegistry::new();
    registry.register(Box::new(Sysusers))?;
    registry.register(Box::new(Tmpfiles))?;
    registry.register(Box::new(Ldconfig))?;
    registry.register(Box::new(Depmod))?;
    registry.register(Box::new(Hwdb))?;
    registry.register(Box::new(GlibSchemas))?;
    registry.register(Box::new(DesktopDatabase))?;
    registry.register(Box::new(MimeDatabase))?;
    registry.register(Box::new(IconCaches))?;
    registry.register(Box::new(FontCache))?;
    Ok(registry)
}
