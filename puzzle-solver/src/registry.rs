//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Days per event (1-25)
pub const MAX_DAYS: usize = 25;

/// Flat storage index for a day, None if out of bounds
#[inline]
fn day_index(day: u8) -> Option<usize> {
    if day == 0 || day > MAX_DAYS as u8 {
        return None;
    }
    Some((day - 1) as usize)
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle day (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Uses a flat `Vec` indexed by day. Registration detects duplicates
/// and out-of-range days; the built registry is immutable.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..MAX_DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory for a specific day
    ///
    /// Returns an error if the day is out of range or already taken.
    pub fn register_factory<F>(
        mut self,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = day_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(RegistryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all solver plugins submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register only the solver plugins matching the filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// // Register only solvers tagged "intcode"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"intcode"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping days to solver factories
pub struct SolverRegistry {
    entries: Vec<Option<RegistryEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific day
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = day_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered solvers, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: i as u8 + 1,
                parts: e.parts,
            })
        })
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        let index = day_index(day)?;
        self.entries
            .get(index)?
            .as_ref()
            .map(|e| FactoryInfo { day, parts: e.parts })
    }

    /// Check if a solver exists for a day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Type-erased counterpart of [`Solver`]: no associated types, so
/// different solver types can live behind one `&'static dyn` in the
/// plugin records.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

/// Blanket implementation so every `Solver` works with the plugin system
impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_factory(day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record for automatic solver registration
///
/// Submitted by the `AutoRegister` derive and collected via `inventory`.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["arithmetic"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle day (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g. "intcode", "grid")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
