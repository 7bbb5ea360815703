// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Field Evolution Engine
// ─────────────────────────────────────────────────────────────────────
//! First-order finite-difference evolution of a complex scalar field
//! ψ = ψ_r + i·ψ_i on a fixed nx × ny grid:
//!
//!   ψ_r' = ψ_r + dt · ∇²ψ_i
//!   ψ_i' = ψ_i − dt · ∇²ψ_r
//!
//! ∇² is the 5-point Laplacian with spacings dx, dy. Only interior cells
//! are updated; boundary cells keep whatever value they last held. The
//! rule is a non-unitary toy analogue of Schrödinger evolution and does
//! not conserve ∑|ψ|².
//!
//! Every step reads one snapshot and writes into pre-allocated scratch
//! buffers, which are then swapped in.
//!
//! The timestep and step count used by `evolve_default` come from
//! `KernelConfig` (see `from_config`).

use nalgebra::DMatrix;

use axabsent_types::{AxError, AxResult, GridConfig, KernelConfig};

/// Grid-based complex field simulator.
#[derive(Debug, Clone)]
pub struct QuantumFieldSimulator {
    grid: GridConfig,
    dt: f64,
    steps: usize,
    field_real: DMatrix<f64>,
    field_imag: DMatrix<f64>,
    // Scratch (next step)
    real_next: DMatrix<f64>,
    imag_next: DMatrix<f64>,
}

impl Default for QuantumFieldSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumFieldSimulator {
    /// Empty 0×0 grid with unit spacing and the default `KernelConfig`
    /// timestep and step count.
    pub fn new() -> Self {
        let defaults = KernelConfig::default();
        let grid = GridConfig::default();
        Self {
            grid,
            dt: defaults.dt,
            steps: defaults.steps,
            field_real: DMatrix::zeros(0, 0),
            field_imag: DMatrix::zeros(0, 0),
            real_next: DMatrix::zeros(0, 0),
            imag_next: DMatrix::zeros(0, 0),
        }
    }

    /// Create a simulator with a validated grid.
    pub fn with_grid(grid: &GridConfig) -> AxResult<Self> {
        let mut sim = Self::new();
        sim.configure(grid)?;
        Ok(sim)
    }

    /// Create a simulator whose grid, timestep and step count all come
    /// from `config`.
    pub fn from_config(config: &KernelConfig) -> AxResult<Self> {
        config.validate()?;
        let mut sim = Self::new();
        sim.configure(&config.grid)?;
        sim.dt = config.dt;
        sim.steps = config.steps;
        Ok(sim)
    }

    /// (Re)allocate both fields as zero `nx × ny` matrices.
    ///
    /// Zero-sized grids are accepted. `dx` and `dy` must be positive and
    /// finite.
    pub fn configure_grid(&mut self, nx: usize, ny: usize, dx: f64, dy: f64) -> AxResult<()> {
        self.configure(&GridConfig::new(nx, ny, dx, dy))
    }

    pub fn configure(&mut self, grid: &GridConfig) -> AxResult<()> {
        grid.validate()
            .map_err(|e| AxError::invalid(format!("grid rejected: {e}")))?;
        self.grid = *grid;
        self.field_real = DMatrix::zeros(grid.nx, grid.ny);
        self.field_imag = DMatrix::zeros(grid.nx, grid.ny);
        self.real_next = DMatrix::zeros(grid.nx, grid.ny);
        self.imag_next = DMatrix::zeros(grid.nx, grid.ny);
        Ok(())
    }

    /// Overwrite both fields. Each must be exactly `nx × ny`.
    pub fn set_initial_conditions(&mut self, real: DMatrix<f64>, imag: DMatrix<f64>) -> AxResult<()> {
        let expected = (self.grid.nx, self.grid.ny);
        if real.shape() != expected || imag.shape() != expected {
            return Err(AxError::invalid(format!(
                "initial condition dimensions {:?}/{:?} do not match configured grid {:?}",
                real.shape(),
                imag.shape(),
                expected
            )));
        }
        self.field_real = real;
        self.field_imag = imag;
        Ok(())
    }

    /// Advance `steps` times with timestep `dt`.
    pub fn evolve(&mut self, steps: usize, dt: f64) -> AxResult<()> {
        if !dt.is_finite() {
            return Err(AxError::invalid(format!("dt must be finite, got {dt}")));
        }
        if self.grid.interior_cells() == 0 {
            log::debug!(
                "evolve: {}x{} grid has no interior, nothing to update",
                self.grid.nx,
                self.grid.ny
            );
            return Ok(());
        }
        for _ in 0..steps {
            self.step(dt);
        }
        Ok(())
    }

    /// Evolve with the configured step count and timestep.
    pub fn evolve_default(&mut self) -> AxResult<()> {
        self.evolve(self.steps, self.dt)
    }

    fn step(&mut self, dt: f64) {
        let (nx, ny) = (self.grid.nx, self.grid.ny);
        let inv_dx2 = 1.0 / (self.grid.dx * self.grid.dx);
        let inv_dy2 = 1.0 / (self.grid.dy * self.grid.dy);

        self.real_next.copy_from(&self.field_real);
        self.imag_next.copy_from(&self.field_imag);

        let re = &self.field_real;
        let im = &self.field_imag;
        for j in 1..ny - 1 {
            for i in 1..nx - 1 {
                let lap_r = (re[(i + 1, j)] + re[(i - 1, j)] - 2.0 * re[(i, j)]) * inv_dx2
                    + (re[(i, j + 1)] + re[(i, j - 1)] - 2.0 * re[(i, j)]) * inv_dy2;
                let lap_i = (im[(i + 1, j)] + im[(i - 1, j)] - 2.0 * im[(i, j)]) * inv_dx2
                    + (im[(i, j + 1)] + im[(i, j - 1)] - 2.0 * im[(i, j)]) * inv_dy2;

                self.real_next[(i, j)] += dt * lap_i;
                self.imag_next[(i, j)] -= dt * lap_r;
            }
        }

        std::mem::swap(&mut self.field_real, &mut self.real_next);
        std::mem::swap(&mut self.field_imag, &mut self.imag_next);
    }

    /// Probability-density analogue |ψ|² = ψ_r² + ψ_i².
    pub fn extract_observables(&self) -> DMatrix<f64> {
        self.field_real.component_mul(&self.field_real)
            + self.field_imag.component_mul(&self.field_imag)
    }

    /// Σ|ψ|² over the whole grid.
    pub fn total_density(&self) -> f64 {
        self.field_real.norm_squared() + self.field_imag.norm_squared()
    }

    /// Zero both fields, keeping the grid.
    pub fn reset(&mut self) {
        self.field_real.fill(0.0);
        self.field_imag.fill(0.0);
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Timestep used by `evolve_default`.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Step count used by `evolve_default`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn field_real(&self) -> &DMatrix<f64> {
        &self.field_real
    }

    pub fn field_imag(&self) -> &DMatrix<f64> {
        &self.field_imag
    }
}
