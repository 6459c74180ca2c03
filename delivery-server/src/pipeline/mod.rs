//! Validation pipeline
//!
//! A [`Pipeline`] is the ordered list of checks one CRUD operation runs
//! before its terminal handler touches a store. Each step is a plain
//! function over a request context: it either enriches the context (the
//! looked-up record, parsed fields) or fails with an [`AppError`]. The
//! runner stops at the first failure, so no step after a failed one runs
//! and nothing is written.
//!
//! ```ignore
//! let ctx = Pipeline::new("dish.create")
//!     .step("required_fields", required_fields)
//!     .step("price", valid_price)
//!     .run(DishRequest::new(&store, &body))?;
//! ```

use crate::utils::{AppError, AppResult};

/// One validation step
pub type StepFn<C> = fn(&mut C) -> AppResult<()>;

struct Step<C> {
    name: &'static str,
    run: StepFn<C>,
}

/// Ordered, short-circuiting list of validation steps over context `C`
pub struct Pipeline<C> {
    name: &'static str,
    steps: Vec<Step<C>>,
}

impl<C> Pipeline<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a step
    pub fn step(mut self, name: &'static str, run: StepFn<C>) -> Self {
        self.steps.push(Step { name, run });
        self
    }

    /// Step names, in execution order
    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|step| step.name)
    }

    /// Run every step in order, returning the enriched context or the first
    /// failure
    pub fn run(&self, mut ctx: C) -> AppResult<C> {
        for step in &self.steps {
            if let Err(e) = (step.run)(&mut ctx) {
                log_failure(self.name, step.name, &e);
                return Err(e);
            }
        }
        Ok(ctx)
    }
}

fn log_failure(pipeline: &str, step: &str, error: &AppError) {
    tracing::debug!(pipeline, step, error = %error, "Validation failed");
}
