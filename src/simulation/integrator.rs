//! Position update for the N-body system
//!
//! Runs after the force & collision pass, so positions advance with the
//! velocities that pass just produced (semi-implicit Euler):
//! x_n+1 = x_n + dt * v_n+1

use super::store::BodyStore;

/// Advance every live body in `store` by `dt`
pub fn euler_integrator(store: &mut BodyStore, dt: f64) {
    for b in store.iter_live_mut() {
        b.position += dt * b.velocity;
    }
}
