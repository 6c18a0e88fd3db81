//! Tests for the augmented-matrix solver

use super::*;

fn real_system(rows: usize, cols: usize, cells: &[f64]) -> AugmentedSystem {
    let cells = cells.iter().copied().map(Complex::from_real).collect();
    AugmentedSystem::new(rows, cols, cells).unwrap()
}

fn assert_close(actual: &[Complex], expected: &[Complex]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (*a - *e).modulus() < 1e-12,
            "expected {expected:?}, got {actual:?}"
        );
    }
}

// ── construction ────────────────────────────────────────────────────────────

#[test]
fn test_new_checks_cell_count() {
    let err = AugmentedSystem::new(2, 3, vec![Complex::ZERO; 5]).unwrap_err();
    assert!(matches!(
        err,
        SolveError::DimensionMismatch {
            expected: 6,
            found: 5,
            ..
        }
    ));
    assert!(matches!(
        AugmentedSystem::new(0, 0, vec![]),
        Err(SolveError::MissingConstantsColumn)
    ));
}

#[test]
fn test_accessors() {
    let system = real_system(2, 3, &[1.0, 1.0, 2.0, 2.0, -1.0, 1.0]);
    assert_eq!(system.rows(), 2);
    assert_eq!(system.cols(), 3);
    assert_eq!(system.variable_count(), 2);
    assert_eq!(system.column_order(), &[0, 1]);
    assert_eq!(system.get(1, 1), Some(Complex::from_real(-1.0)));
    assert_eq!(system.get(2, 0), None);
    assert_eq!(system.get(0, 3), None);
}

// ── outcomes ────────────────────────────────────────────────────────────────

#[test]
fn test_unique_two_by_two() {
    // x + y = 2, 2x - y = 1
    let mut system = real_system(2, 3, &[1.0, 1.0, 2.0, 2.0, -1.0, 1.0]);
    let solution = system.solve();
    assert_eq!(
        solution,
        Solution::Unique(vec![Complex::ONE, Complex::ONE])
    );
    assert_eq!(solution.to_string(), "1.0\n1.0\n");
}

#[test]
fn test_inconsistent() {
    // 0x = 5, 0x = 3
    let mut system = real_system(2, 2, &[0.0, 5.0, 0.0, 3.0]);
    assert_eq!(system.solve(), Solution::NoSolution);
}

#[test]
fn test_underdetermined() {
    // x + y = 2
    let mut system = real_system(1, 3, &[1.0, 1.0, 2.0]);
    assert_eq!(system.solution_text(), "Infinitely many solutions");
}

#[test]
fn test_inconsistent_after_elimination() {
    // x + y = 1, 2x + 2y = 5
    let mut system = real_system(2, 3, &[1.0, 1.0, 1.0, 2.0, 2.0, 5.0]);
    assert_eq!(system.solution_text(), "No solutions");
}

#[test]
fn test_redundant_equations_still_unique() {
    // x = 2 stated three ways
    let mut system = real_system(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
    assert_eq!(
        system.solve(),
        Solution::Unique(vec![Complex::from_real(2.0)])
    );
}

#[test]
fn test_three_by_three() {
    // x + y + z = 6, 2x + y - z = 1, x - y + z = 2 -> (1, 2, 3)
    let mut system = real_system(
        3,
        4,
        &[
            1.0, 1.0, 1.0, 6.0, //
            2.0, 1.0, -1.0, 1.0, //
            1.0, -1.0, 1.0, 2.0,
        ],
    );
    let solution = system.solve();
    assert_close(
        solution.values().unwrap(),
        &[
            Complex::from_real(1.0),
            Complex::from_real(2.0),
            Complex::from_real(3.0),
        ],
    );
}

#[test]
fn test_complex_coefficients() {
    // Constants are built from a known answer, then checked by substitution.
    let a = [
        [Complex::new(1.0, 1.0), Complex::ONE],
        [Complex::ONE, Complex::new(0.0, -1.0)],
    ];
    let x = [Complex::new(1.0, -1.0), Complex::new(2.0, 0.5)];
    let b: Vec<Complex> = a
        .iter()
        .map(|row| row[0] * x[0] + row[1] * x[1])
        .collect();

    let cells = vec![a[0][0], a[0][1], b[0], a[1][0], a[1][1], b[1]];
    let mut system = AugmentedSystem::new(2, 3, cells).unwrap();
    let solution = system.solve();
    let values = solution.values().unwrap();

    assert_close(values, &x);
    for (row, constant) in a.iter().zip(&b) {
        let lhs = row[0] * values[0] + row[1] * values[1];
        assert!((lhs - *constant).modulus() < 1e-12);
    }
}

#[test]
fn test_zero_variables() {
    let mut consistent = real_system(2, 1, &[0.0, 0.0]);
    assert_eq!(consistent.solve(), Solution::Unique(vec![]));

    let mut inconsistent = real_system(2, 1, &[0.0, 4.0]);
    assert_eq!(inconsistent.solve(), Solution::NoSolution);
}

#[test]
fn test_zero_equations() {
    let mut system = real_system(0, 3, &[]);
    assert_eq!(system.solve(), Solution::InfiniteSolutions);
}

// ── pivoting ────────────────────────────────────────────────────────────────

#[test]
fn test_row_swap_keeps_variable_order() {
    // y = 3, x + y = 5 -> x = 2, y = 3
    let mut system = real_system(2, 3, &[0.0, 1.0, 3.0, 1.0, 1.0, 5.0]);
    let solution = system.solve();
    assert_eq!(
        solution,
        Solution::Unique(vec![Complex::from_real(2.0), Complex::from_real(3.0)])
    );
    assert_eq!(system.column_order(), &[0, 1]);
}

#[test]
fn test_column_swap_is_recorded() {
    // Column 1 is twice column 0, so step 1 finds nothing below or on the
    // diagonal and has to pull column 2 over.
    let mut system = real_system(
        3,
        4,
        &[
            1.0, 2.0, 1.0, 4.0, //
            2.0, 4.0, 3.0, 9.0, //
            3.0, 6.0, 5.0, 14.0,
        ],
    );
    assert_eq!(system.solve(), Solution::InfiniteSolutions);
    assert_eq!(system.column_order(), &[0, 2, 1]);
    assert_eq!(system.significant_equations(), 2);
}

#[test]
fn test_permuted_columns_map_back() {
    // x = 1, y = 2 with the two variable columns swapped before solving
    let mut system = real_system(2, 3, &[1.0, 1.0, 3.0, 1.0, -1.0, -1.0]);
    system.swap_columns(0, 1);
    assert_eq!(system.column_order(), &[1, 0]);

    let solution = system.solve();
    assert_close(
        solution.values().unwrap(),
        &[Complex::from_real(1.0), Complex::from_real(2.0)],
    );
}

#[test]
fn test_pivot_search_reaches_rest_of_submatrix() {
    // After step 0, row 1 is all zero and column 1 is zero below it, but
    // row 2 still has a pivot in column 2.
    let mut system = real_system(
        3,
        4,
        &[
            1.0, 1.0, 1.0, 3.0, //
            1.0, 1.0, 1.0, 3.0, //
            0.0, 0.0, 1.0, 1.0,
        ],
    );
    assert_eq!(system.find_pivot(0), Some((0, 0)));
    system.forward_eliminate();
    assert_eq!(system.significant_equations(), 2);
    assert_eq!(system.classify(), Some(Solution::InfiniteSolutions));
}

#[test]
fn test_inconsistency_hidden_behind_zero_row() {
    // x + y + z = 1, z = 0, x + y + z = 2: step 1 pulls z over with a column
    // swap and the contradiction ends up in the last row.
    let mut system = real_system(
        3,
        4,
        &[
            1.0, 1.0, 1.0, 1.0, //
            0.0, 0.0, 1.0, 0.0, //
            1.0, 1.0, 1.0, 2.0,
        ],
    );
    assert_eq!(system.solve(), Solution::NoSolution);
}

// ── classification ──────────────────────────────────────────────────────────

#[test]
fn test_classification_is_idempotent() {
    for cells in [
        vec![1.0, 1.0, 2.0, 2.0, -1.0, 1.0],
        vec![1.0, 1.0, 1.0, 2.0, 2.0, 5.0],
        vec![1.0, 1.0, 2.0, 2.0, 2.0, 4.0],
    ] {
        let mut system = real_system(2, 3, &cells);
        system.forward_eliminate();
        let first = system.classify();
        let second = system.classify();
        assert_eq!(first, second);
    }
}

#[test]
fn test_solve_twice() {
    let mut system = real_system(2, 3, &[1.0, 1.0, 2.0, 2.0, -1.0, 1.0]);
    let first = system.solve();
    let second = system.solve();
    assert_eq!(first, second);
}

#[test]
fn test_reduced_grid() {
    let mut system = real_system(2, 3, &[2.0, 4.0, 6.0, 1.0, 3.0, 5.0]);
    system.forward_eliminate();
    // Leading ones, zero below the pivot.
    assert_eq!(system.get(0, 0), Some(Complex::ONE));
    assert_eq!(system.get(0, 1), Some(Complex::from_real(2.0)));
    assert_eq!(system.get(1, 0), Some(Complex::ZERO));
    assert_eq!(system.get(1, 1), Some(Complex::ONE));
    assert_eq!(system.get(1, 2), Some(Complex::from_real(2.0)));
}

#[test]
fn test_display_grid() {
    let system = real_system(1, 3, &[1.0, -0.5, 2.0]);
    assert_eq!(system.to_string(), "       1.0       -0.5        2.0\n");
}
