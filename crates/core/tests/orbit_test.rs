//! Tests for the cyclic action and the numerical characteristics
//! o(lambda), d(lambda) and triangularity.

use young_core::{YoungDiagram, YoungDiagrams};

fn yd(height: usize, width: usize, rows: &[usize]) -> YoungDiagram {
    YoungDiagram::new(height, width, rows.to_vec()).unwrap()
}

fn rows_of(diagrams: &[YoungDiagram]) -> Vec<Vec<usize>> {
    diagrams.iter().map(|d| d.row_lengths().to_vec()).collect()
}

#[test]
fn test_orbit_members_in_rotation_order() {
    let orbit: Vec<_> = yd(2, 3, &[2, 1]).cyclic_orbit().collect();
    assert_eq!(
        rows_of(&orbit),
        vec![vec![2, 1], vec![3, 2], vec![2, 0], vec![3, 1], vec![1, 0]]
    );
}

#[test]
fn test_orbit_of_periodic_word() {
    // RURU has period 2.
    let d: YoungDiagram = "RURU".parse().unwrap();
    assert_eq!(d.orbit_length(), 2);
    let orbit: Vec<_> = d.cyclic_orbit().collect();
    assert_eq!(orbit.len(), 2);
    assert_eq!(orbit[0], d);
    assert_eq!(orbit[1], &d >> 1);
}

#[test]
fn test_orbit_length_divides_half_perimeter() {
    for h in 0..=4 {
        for w in 0..=4 {
            for d in YoungDiagrams::new(h, w).iter() {
                let o = d.orbit_length();
                assert_eq!(d.half_perimeter().max(1) % o, 0, "{d}");
                assert_eq!(d.cyclic_orbit().count(), o, "{d}");
                assert_eq!(&d >> o, d);
            }
        }
    }
}

#[test]
fn test_orbit_stays_in_frame() {
    let d = yd(3, 2, &[2, 1]);
    for fellow in d.cyclic_orbit() {
        assert_eq!(fellow.frame(), d.frame());
    }
}

#[test]
fn test_upper_triangular_bound() {
    // 2x3 frame: row 0 may hold 3 cells, row 1 at most 1.
    assert!(yd(2, 3, &[3, 1]).is_upper_triangular().unwrap());
    assert!(!yd(2, 3, &[3, 2]).is_upper_triangular().unwrap());
    assert!(yd(2, 3, &[]).is_upper_triangular().unwrap());
}

#[test]
fn test_lower_triangular_is_complement_upper() {
    for h in 1..=4 {
        for w in 0..=4 {
            for d in YoungDiagrams::new(h, w).iter() {
                assert_eq!(
                    d.is_lower_triangular().unwrap(),
                    d.complement().is_upper_triangular().unwrap()
                );
            }
        }
    }
}

#[test]
fn test_steps_to_next_lower_triangular() {
    assert_eq!(
        yd(2, 3, &[2, 1]).steps_to_next_lower_triangular().unwrap(),
        Some(0)
    );
    // [1, 0] is not lower triangular; one rotation reaches [2, 1].
    assert!(!yd(2, 3, &[1]).is_lower_triangular().unwrap());
    assert_eq!(
        yd(2, 3, &[1]).steps_to_next_lower_triangular().unwrap(),
        Some(1)
    );
}

#[test]
fn test_steps_to_next_lower_triangular_lands_on_lower() {
    for d in YoungDiagrams::new(3, 4).iter() {
        if let Some(k) = d.steps_to_next_lower_triangular().unwrap() {
            assert!(k < d.half_perimeter());
            assert!(d.cyclic_action(k as i64).is_lower_triangular().unwrap());
            for j in 0..k {
                assert!(!d.cyclic_action(j as i64).is_lower_triangular().unwrap());
            }
        }
    }
}

#[test]
fn test_steps_to_next_lower_triangular_needs_height() {
    assert!(yd(0, 3, &[]).steps_to_next_lower_triangular().is_err());
}
