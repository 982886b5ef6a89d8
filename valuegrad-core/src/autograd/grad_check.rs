use crate::error::ValueGradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ValueGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ValueGradError> for GradCheckError {
    fn from(err: ValueGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Absolute tolerance, dominant for gradients near zero.
    pub abs_tol: f64,
    /// Relative tolerance, dominant for large gradients.
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tol: 1e-6,
            rel_tol: 1e-5,
        }
    }
}

/// Builds a fresh graph, creates one leaf per coordinate of `point` and runs `func`.
fn evaluate<F>(func: &F, point: &[f64]) -> Result<(Graph, Vec<Value>, Value), ValueGradError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ValueGradError>,
{
    let graph = Graph::new();
    let inputs: Vec<Value> = point.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&graph, &inputs)?;
    Ok((graph, inputs, output))
}

/// Computes central finite differences `(f(x+eps) - f(x-eps)) / 2eps` for every
/// coordinate of `point`.
///
/// Every evaluation runs on its own graph, so `func` sees fresh leaves each time.
pub fn numerical_grad<F>(func: F, point: &[f64], epsilon: f64) -> Result<Vec<f64>, ValueGradError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ValueGradError>,
{
    let mut grads = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        let (loss_plus, loss_minus) = perturbed_losses(&func, point, i, epsilon)?;
        grads.push((loss_plus - loss_minus) / (2.0 * epsilon));
    }
    Ok(grads)
}

fn perturbed_losses<F>(
    func: &F,
    point: &[f64],
    index: usize,
    epsilon: f64,
) -> Result<(f64, f64), ValueGradError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ValueGradError>,
{
    let mut shifted = point.to_vec();
    shifted[index] = point[index] + epsilon;
    let (_, _, plus) = evaluate(func, &shifted)?;
    shifted[index] = point[index] - epsilon;
    let (_, _, minus) = evaluate(func, &shifted)?;
    Ok((plus.value(), minus.value()))
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per coordinate of `point` and must
/// return the scalar output built from them. The analytical gradients come from a
/// single backward pass from that output.
///
/// # Errors
/// The first input whose gradients disagree beyond `config`'s tolerances is reported
/// as [`GradCheckError::GradientMismatch`].
pub fn check_grad<F>(func: F, point: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Value]) -> Result<Value, ValueGradError>,
{
    // --- 1. Analytical gradients ---
    let (_graph, inputs, output) = evaluate(&func, point)?;
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- 2. Compare against central differences ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let (loss_plus, loss_minus) = perturbed_losses(&func, point, i, config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tol,
            max_relative = config.rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numerical_grad_quadratic() -> Result<(), ValueGradError> {
        // f(x, y) = x^2 + 3y
        let f = |_: &Graph, v: &[Value]| Ok(v[0].powf(2.0) + &v[1] * 3.0);
        let grads = numerical_grad(f, &[1.5, -2.0], 1e-6)?;
        assert_relative_eq!(grads[0], 3.0, epsilon = 1e-6);
        assert_relative_eq!(grads[1], 3.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_check_grad_passes() -> Result<(), GradCheckError> {
        let f = |_: &Graph, v: &[Value]| Ok((&v[0] * &v[1] + 1.0) / (&v[1] - 0.5));
        check_grad(f, &[0.7, 2.0], &GradCheckConfig::default())
    }

    #[test]
    fn test_check_grad_reports_forward_error() {
        let f = |_: &Graph, v: &[Value]| v[0].try_pow(&v[0]);
        let err = check_grad(f, &[2.0], &GradCheckConfig::default()).unwrap_err();
        assert!(matches!(err, GradCheckError::ForwardPassError(_)));
    }

    #[test]
    fn test_check_grad_detects_non_finite() {
        // 1/x at 0: the numerical quotient blows up
        let f = |_: &Graph, v: &[Value]| Ok(v[0].powf(-1.0));
        let err = check_grad(f, &[0.0], &GradCheckConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            GradCheckError::NumericalGradNaNOrInfinite { .. }
                | GradCheckError::AnalyticalGradNaNOrInfinite { .. }
        ));
    }

    #[test]
    fn test_check_grad_catches_wrong_gradient() {
        // The forward value depends on the input, the graph does not: a leaf built
        // from a raw number carries no gradient back to x.
        let f = |g: &Graph, v: &[Value]| Ok(g.leaf(v[0].value() * 2.0) + 0.0);
        let err = check_grad(f, &[1.0], &GradCheckConfig::default()).unwrap_err();
        match err {
            GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            } => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
                assert_relative_eq!(numerical_grad, 2.0, epsilon = 1e-6);
            }
            e => panic!("Expected GradientMismatch, got {:?}", e),
        }
    }
}
