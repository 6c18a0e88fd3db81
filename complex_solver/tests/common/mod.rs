//! Shared helpers for integration tests
// Not every test target uses every helper.
#![allow(dead_code)]

use complex_solver::Complex;

/// Small deterministic generator so randomized systems are reproducible.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform-ish value in `[-1, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let bits = self.0 >> 11;
        (bits as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }

    pub fn next_complex(&mut self) -> Complex {
        let re = self.next_f64();
        let im = self.next_f64();
        Complex::new(re, im)
    }
}

/// A square system whose coefficient matrix is strictly diagonally
/// dominant, so it always has a unique solution.
#[derive(Debug, Clone)]
pub struct RandomSystem {
    pub n: usize,
    /// Row-major `n x n` coefficients
    pub coefficients: Vec<Complex>,
    pub constants: Vec<Complex>,
}

impl RandomSystem {
    pub fn generate(n: usize, rng: &mut Lcg) -> Self {
        let mut coefficients: Vec<Complex> = (0..n * n).map(|_| rng.next_complex()).collect();
        for row in 0..n {
            let off_diagonal: f64 = (0..n)
                .filter(|&col| col != row)
                .map(|col| coefficients[row * n + col].modulus())
                .sum();
            coefficients[row * n + row] = Complex::from_real(off_diagonal + 1.0);
        }
        let constants = (0..n).map(|_| rng.next_complex()).collect();
        Self {
            n,
            coefficients,
            constants,
        }
    }

    /// Augmented cells, constants appended to each row
    pub fn augmented(&self) -> Vec<Complex> {
        let mut cells = Vec::with_capacity(self.n * (self.n + 1));
        for row in 0..self.n {
            cells.extend_from_slice(&self.coefficients[row * self.n..(row + 1) * self.n]);
            cells.push(self.constants[row]);
        }
        cells
    }

    /// Input text in the solver's format
    pub fn to_source(&self) -> String {
        let mut source = format!("{} {}\n", self.n, self.n);
        for row in self.augmented().chunks(self.n + 1) {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            source.push_str(&cells.join(" "));
            source.push('\n');
        }
        source
    }

    /// Largest `|A x - b|` over all rows
    pub fn residual(&self, x: &[Complex]) -> f64 {
        (0..self.n)
            .map(|row| {
                let lhs = (0..self.n).fold(Complex::ZERO, |acc, col| {
                    acc + self.coefficients[row * self.n + col] * x[col]
                });
                (lhs - self.constants[row]).modulus()
            })
            .fold(0.0, f64::max)
    }
}

pub fn assert_close(actual: &[Complex], expected: &[Complex], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (*a - *e).modulus() < tolerance,
            "value {i}: expected {e}, got {a}"
        );
    }
}
