use std::collections::BTreeMap;
use std::f64::consts::PI;

use approx::assert_relative_eq;
use ert_physics::prelude::*;
use rstest::{fixture, rstest};

/// Grid whose electrode keys map to arbitrary nodes, like a renumbered mesh.
struct LookupGrid {
    nodes: Vec<GridNode>,
    electrodes: BTreeMap<usize, usize>,
}

impl ElectrodeGrid for LookupGrid {
    fn electrode_node(&self, electrode: usize) -> Result<usize, GridError> {
        self.electrodes
            .get(&electrode)
            .copied()
            .ok_or(GridError::UnknownElectrode { electrode, available: self.electrodes.len() })
    }

    fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }
}

#[fixture]
fn three_node_line() -> FeGrid {
    FeGrid::from_positions([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], vec![0, 1, 2]).unwrap()
}

#[rstest]
fn superposition_on_three_node_line(three_node_line: FeGrid) {
    let configs = from_rows([[1, 2, 3, 3]]).unwrap();
    let fields = superposed_potentials(&three_node_line, &configs, 1.0).unwrap();
    assert_eq!(fields.len(), 1);
    let field = &fields[0];
    assert_eq!(field.len(), three_node_line.node_count());
    assert_eq!(field[0], f64::INFINITY);
    assert_eq!(field[1], f64::NEG_INFINITY);
    assert_relative_eq!(field[2], -1.0 / (4.0 * PI), max_relative = 1.0e-12);
    assert_relative_eq!(field[2], -0.0796, epsilon = 1.0e-4);
}

#[rstest]
fn superposition_is_linear_per_node(three_node_line: FeGrid) {
    let rho = 12.0;
    let configs = from_rows([[3, 1, 2, 2]]).unwrap();
    let field = &superposed_potentials(&three_node_line, &configs, rho).unwrap()[0];
    let r_a = DenseVector::from_vec(vec![2.0, 1.0, 0.0]);
    let r_b = DenseVector::from_vec(vec![0.0, 1.0, 2.0]);
    let sink = point_source_potentials(&r_b, rho);
    let expected = point_source_potentials(&r_a, rho) - &sink;
    assert_relative_eq!(field[1], expected[1], max_relative = 1.0e-12);
    assert_eq!(field[1], 0.0);
    assert_relative_eq!(-sink[2], -point_source_potential(2.0, rho), max_relative = 1.0e-12);
    assert_eq!(field[0], f64::NEG_INFINITY);
    assert_eq!(field[2], f64::INFINITY);
}

#[rstest]
fn batch_preserves_order(three_node_line: FeGrid) {
    let configs = from_rows([[1, 2, 1, 1], [2, 3, 1, 1], [3, 1, 1, 1]]).unwrap();
    let fields = superposed_potentials(&three_node_line, &configs, 5.0).unwrap();
    assert_eq!(fields.len(), configs.len());
    for (config, field) in configs.iter().zip(&fields) {
        assert_eq!(field, &dipole_potential(&three_node_line, config, 5.0).unwrap());
    }

    let reversed: Vec<Configuration> = configs.iter().rev().copied().collect();
    let reversed_fields = superposed_potentials(&three_node_line, &reversed, 5.0).unwrap();
    for (a, b) in fields.iter().zip(reversed_fields.iter().rev()) {
        assert_eq!(a, b);
    }
}

#[rstest]
fn lookup_failure_aborts_the_batch(three_node_line: FeGrid) {
    let configs = from_rows([[1, 2, 1, 1], [1, 4, 1, 1], [2, 3, 1, 1]]).unwrap();
    let err = superposed_potentials(&three_node_line, &configs, 1.0).unwrap_err();
    assert!(matches!(
        err,
        ForwardError::Lookup(GridError::UnknownElectrode { electrode: 4, available: 3 })
    ));
}

#[test]
fn voltage_is_receiver_difference_after_shift() {
    let grid = LookupGrid {
        nodes: vec![
            GridNode::new(0, 0.0, 0.0),
            GridNode::new(1, 1.0, 0.0),
            GridNode::new(2, 2.0, 0.0),
        ],
        electrodes: BTreeMap::from([(0, 0), (1, 1), (2, 2)]),
    };
    let configs = from_rows([[1, 2, 1, 3]]).unwrap();
    let fields = vec![PotentialField::from_vec(vec![10.0, 7.0, 3.0])];
    let voltages = voltages_from_potentials(&grid, &configs, &fields).unwrap();
    assert_eq!(voltages, vec![7.0]);
}

#[test]
fn custom_grid_resolves_current_electrodes_as_given() {
    // Electrode keys 10 and 20 sit on nodes 2 and 0.
    let grid = LookupGrid {
        nodes: vec![
            GridNode::new(0, 0.0, 0.0),
            GridNode::new(1, 0.0, -1.0),
            GridNode::new(2, 4.0, 0.0),
        ],
        electrodes: BTreeMap::from([(10, 2), (20, 0)]),
    };
    let configs = from_rows([[10, 20, 1, 1]]).unwrap();
    let field = &superposed_potentials(&grid, &configs, 1.0).unwrap()[0];
    let expected = point_source_potential(17.0_f64.sqrt(), 1.0) - point_source_potential(1.0, 1.0);
    assert_relative_eq!(field[1], expected, max_relative = 1.0e-12);
}

#[rstest]
fn mismatched_batches_are_rejected(three_node_line: FeGrid) {
    let configs = dipole_dipole(3, 0, 1).map(|_| ()).unwrap_err();
    assert!(matches!(configs, ConfigError::TooFewElectrodes { .. }));

    let configs = from_rows([[1, 2, 2, 3]; 5]).unwrap();
    let fields = vec![PotentialField::zeros(3); 3];
    let err = voltages_from_potentials(&three_node_line, &configs, &fields).unwrap_err();
    assert!(matches!(err, ForwardError::ShapeMismatch { configs: 5, potentials: 3 }));
}

#[rstest]
fn voltages_follow_the_potential_batch(three_node_line: FeGrid) {
    let configs = from_rows([[1, 3, 2, 3], [3, 1, 2, 3]]).unwrap();
    let fields = superposed_potentials(&three_node_line, &configs, 2.0).unwrap();
    let voltages = voltages_from_potentials(&three_node_line, &configs, &fields).unwrap();
    // Receivers shift to electrodes 1 and 2, i.e. nodes 0 and 1.
    assert_eq!(voltages.len(), 2);
    assert_eq!(voltages[0], f64::INFINITY);
    assert_eq!(voltages[1], f64::NEG_INFINITY);

    let as_given =
        receiver_voltages(&three_node_line, &configs, &fields, ReceiverIndexing::AsGiven)
            .unwrap();
    assert_eq!(as_given[0], f64::INFINITY);
}
