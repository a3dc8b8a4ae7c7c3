//! Domain Layer
//!
//! The core of the engine: pure alchemical and astrological logic without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Pillars, position snapshots, candidates
//! - `value_objects/` - Closed enums and typed records (Element, Planet, Sign, ...)
//! - `services/` - Calculators (Thermodynamics, Kalchm, Monica, Scorer)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Planetary positions come in through a trait-defined port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
