//! Tests for the finite-domain solver.

use super::*;

#[tokio::test]
async fn test_single_solution() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=9);
    let y = solver.int_var("y", 0..=9);
    solver
        .assert((x.term() + y.term()).equals(Term::int(3)))
        .unwrap();
    solver.assert(x.term().equals(Term::int(1))).unwrap();

    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
    let model = solver.model().unwrap();
    assert_eq!(model.value_of(&x).unwrap(), 1);
    assert_eq!(model.value_of(&y).unwrap(), 2);
    assert_eq!(model.values(), &[1, 2]);
}

#[tokio::test]
async fn test_lexicographic_order() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", -5..=5);
    solver
        .assert((x.term() * x.term()).equals(Term::int(4)))
        .unwrap();

    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
    assert_eq!(solver.model().unwrap().value_of(&x).unwrap(), -2);

    solver.assert(x.term().not_equals(Term::int(-2))).unwrap();
    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
    assert_eq!(solver.model().unwrap().value_of(&x).unwrap(), 2);
}

#[tokio::test]
async fn test_unsat() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=3);
    solver.assert(Term::int(5).le(x.term())).unwrap();

    assert_eq!(solver.check().await.unwrap(), Verdict::Unsat);
    assert!(matches!(solver.model(), Err(SatStreamError::ModelUnavailable)));
}

#[tokio::test]
async fn test_false_constraint_is_unsat() {
    let mut solver = FiniteDomainSolver::new();
    solver.int_var("x", 0..=3);
    solver.assert(solver.bool_false()).unwrap();

    assert_eq!(solver.check().await.unwrap(), Verdict::Unsat);
}

#[tokio::test]
async fn test_empty_domain_is_unsat() {
    let mut solver = FiniteDomainSolver::new();
    let (start, end) = (3, 0);
    solver.int_var("x", start..=end);

    assert_eq!(solver.check().await.unwrap(), Verdict::Unsat);
}

#[tokio::test]
async fn test_no_variables() {
    let mut solver = FiniteDomainSolver::new();

    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
    assert!(solver.model().unwrap().values().is_empty());
}

#[tokio::test]
async fn test_model_before_check() {
    let solver = FiniteDomainSolver::new();
    assert!(matches!(solver.model(), Err(SatStreamError::ModelUnavailable)));
}

#[tokio::test]
async fn test_model_survives_later_variables() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=0);
    solver.check().await.unwrap();
    let model = solver.model().unwrap();

    let y = solver.int_var("y", 0..=0);
    assert_eq!(model.value_of(&x).unwrap(), 0);
    assert_eq!(
        model.value_of(&y),
        Err(SatStreamError::UnknownVariable("x1".to_string()))
    );
}

#[tokio::test]
async fn test_type_error_is_reported() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=1);
    solver.assert(x.term()).unwrap();

    assert!(matches!(
        solver.check().await,
        Err(SatStreamError::Backend(_))
    ));
}

#[tokio::test]
async fn test_injected_faults() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=1);
    solver.fail_check_at(2);
    solver.fail_assert_at(1);

    assert!(solver.assert(x.term().equals(Term::int(1))).is_err());
    assert!(solver.constraints().is_empty());
    assert_eq!(solver.assertion_count(), 1);

    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
    assert!(solver.check().await.is_err());
    assert_eq!(solver.check_count(), 2);
    assert!(matches!(solver.model(), Err(SatStreamError::ModelUnavailable)));

    solver.check().await.unwrap();
    solver.fail_model();
    assert!(matches!(solver.model(), Err(SatStreamError::Backend(_))));
}

#[test]
fn test_names_and_builders() {
    let mut solver = FiniteDomainSolver::new();
    let x = solver.int_var("x", 0..=1);

    assert_eq!(solver.name(x), Some("x"));
    assert_eq!(
        solver.or(solver.bool_false(), solver.neq(&x, &1)).to_string(),
        "(false || (x0 != 1))"
    );
    assert_eq!((!x.term().lt(Term::int(1))).to_string(), "!(x0 < 1)");
}

#[tokio::test]
async fn test_injected_unknown() {
    let mut solver = FiniteDomainSolver::new();
    solver.int_var("x", 0..=1);
    solver.unknown_at(1);

    assert_eq!(solver.check().await.unwrap(), Verdict::Unknown);
    assert!(matches!(solver.model(), Err(SatStreamError::ModelUnavailable)));
    assert_eq!(solver.check().await.unwrap(), Verdict::Sat);
}
