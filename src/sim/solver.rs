//! Convection Solver Module
//! Explicit upwind (FTBS) integration of the 1D non-linear convection
//! equation du/dt + u * du/dx = 0 on a uniform grid.

/// Nodes initially raised to `U_HAT`, forming the square-wave profile.
const HAT_FIRST: usize = 29;
const HAT_LAST: usize = 299;
const U_BASE: f64 = 1.0;
const U_HAT: f64 = 2.0;

/// Grid and time-stepping parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Number of spatial nodes (at least 2).
    pub nx: usize,
    /// Number of time steps.
    pub nt: usize,
    /// Time step size.
    pub dt: f64,
    /// Left edge of the domain.
    pub x_min: f64,
    /// Right edge of the domain.
    pub x_max: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            nx: 801,
            nt: 3000,
            dt: 1.5e-4,
            x_min: 0.0,
            x_max: 2.0,
        }
    }
}

impl SimParams {
    /// Node spacing.
    pub fn dx(&self) -> f64 {
        (self.x_max - self.x_min) / (self.nx - 1) as f64
    }
}

/// A convection run: the grid plus the current velocity profile.
pub struct Simulation {
    params: SimParams,
    x: Vec<f64>,
    u: Vec<f64>,
}

impl Simulation {
    /// Build the grid and the square-wave initial profile.
    pub fn new(params: SimParams) -> Self {
        let dx = params.dx();
        let x = (0..params.nx)
            .map(|i| params.x_min + dx * i as f64)
            .collect();

        let mut u = vec![U_BASE; params.nx];
        for node in u.iter_mut().take(HAT_LAST + 1).skip(HAT_FIRST) {
            *node = U_HAT;
        }

        Self { params, x, u }
    }

    /// Current velocity profile.
    pub fn profile(&self) -> &[f64] {
        &self.u
    }

    /// Current (x, u) samples, ready for the table writer.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().zip(self.u.iter()).map(|(&x, &u)| (x, u))
    }

    /// Advance one time step with a backward-space difference.
    ///
    /// Node 0 is the inflow boundary and keeps its initial value.
    pub fn step(&mut self) {
        let dtdx = self.params.dt / self.params.dx();
        let un = self.u.clone();
        for i in 1..self.u.len() {
            self.u[i] = un[i] - un[i] * dtdx * (un[i] - un[i - 1]);
        }
    }

    /// Run the configured number of time steps.
    pub fn run(&mut self) {
        for _ in 0..self.params.nt {
            self.step();
        }
    }
}
