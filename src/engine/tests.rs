// engine/tests.rs
// Full settings -> engine parameter derivation

#[cfg(test)]
mod derivation {
    use crate::engine::EngineParameters;
    use crate::errors::{SettingsLoadError, ValidationError};
    use crate::settings::{BoxShape, ProtocolSettings};
    use crate::units::{Length, MolarEnergy, Time};
    use ultraviolet::Vec3;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn default_settings_derive() {
        init_logging();
        let params = EngineParameters::derive(&ProtocolSettings::default()).unwrap();
        assert_eq!(
            params,
            EngineParameters {
                steps_per_iteration: 625,
                equilibration_steps: 250_000,
                production_steps: 1_250_000,
                checkpoint_interval_iterations: 100,
                real_time_analysis_iterations: Some(100),
                real_time_analysis_minimum_iterations: Some(200),
                early_termination_target_error_kt: 0.0,
            }
        );
        assert_eq!(params.total_iterations(), Some(2400));
    }

    #[test]
    fn small_self_to_self_run() {
        init_logging();
        let mut s = ProtocolSettings::default();
        s.simulation.equilibration_length = Time::picoseconds(0.1);
        s.simulation.production_length = Time::picoseconds(0.1);
        s.simulation.time_per_iteration = Time::femtoseconds(20.0);
        s.simulation.checkpoint_interval = Time::femtoseconds(20.0);
        s.simulation.real_time_analysis_interval = None;

        let params = EngineParameters::try_from(&s).unwrap();
        assert_eq!(params.steps_per_iteration, 5);
        assert_eq!(params.equilibration_steps, 25);
        assert_eq!(params.production_steps, 25);
        assert_eq!(params.checkpoint_interval_iterations, 1);
        assert_eq!(params.real_time_analysis_iterations, None);
        assert_eq!(params.real_time_analysis_minimum_iterations, None);
        assert_eq!(params.total_iterations(), Some(10));
    }

    #[test]
    fn target_error_is_scaled_by_temperature() {
        let mut s = ProtocolSettings::default();
        s.thermo.temperature = crate::units::Temperature::kelvin(300.0);
        s.simulation.early_termination_target_error = Some(MolarEnergy::kcal_per_mol(0.596));
        let params = EngineParameters::derive(&s).unwrap();
        assert!((params.early_termination_target_error_kt - 1.0).abs() < 1e-3);
    }

    #[test]
    fn solvation_is_checked_before_timestep() {
        let mut s = ProtocolSettings::default();
        s.forcefield.hydrogen_mass = 1.008;
        s.solvation.solvent_padding = Some(Length::nanometers(1.2));
        s.solvation.box_size = Some(Vec3::new(5.0, 5.0, 5.0));
        assert!(matches!(
            EngineParameters::derive(&s),
            Err(ValidationError::ConflictingSettings(_))
        ));

        s.solvation.box_size = None;
        s.solvation.box_shape = Some(BoxShape::Dodecahedron);
        assert!(matches!(
            EngineParameters::derive(&s),
            Err(ValidationError::UnstableIntegration { .. })
        ));
    }

    #[test]
    fn production_off_iteration_boundary_fails() {
        let mut s = ProtocolSettings::default();
        s.simulation.production_length = Time::picoseconds(5001.0);
        assert!(matches!(
            EngineParameters::derive(&s),
            Err(ValidationError::NonIntegralIterations { mc_steps: 625, .. })
        ));
    }

    #[test]
    fn derives_from_toml_and_reports_json() {
        let s = ProtocolSettings::from_toml_str(
            r#"
[integrator]
timestep = "2 fs"

[forcefield]
hydrogen_mass = 1.008

[simulation]
time_per_iteration = "1 ps"
real_time_analysis_interval = "100 ps"
real_time_analysis_minimum_time = "200 ps"
checkpoint_interval = "50 ps"
equilibration_length = "100 ps"
production_length = "1 ns"
"#,
        )
        .unwrap();
        let params = EngineParameters::derive(&s).unwrap();
        assert_eq!(params.steps_per_iteration, 500);
        assert_eq!(params.production_steps, 500_000);
        assert_eq!(params.checkpoint_interval_iterations, 50);

        let json = params.to_json_pretty().unwrap();
        let back: EngineParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn hand_built_parameters_without_steps_have_no_total() {
        let params = EngineParameters {
            steps_per_iteration: 0,
            equilibration_steps: 100,
            production_steps: 100,
            checkpoint_interval_iterations: 1,
            real_time_analysis_iterations: None,
            real_time_analysis_minimum_iterations: None,
            early_termination_target_error_kt: 0.0,
        };
        assert_eq!(params.total_iterations(), None);

        let params = EngineParameters {
            steps_per_iteration: 1,
            equilibration_steps: i64::MAX,
            ..params
        };
        assert_eq!(params.total_iterations(), None);
    }

    #[test]
    fn cold_temperature_with_target_error_fails() {
        let mut s = ProtocolSettings::default();
        s.thermo.temperature = crate::units::Temperature::kelvin(0.0);
        s.simulation.early_termination_target_error = Some(MolarEnergy::kcal_per_mol(0.5));
        assert!(matches!(
            EngineParameters::derive(&s),
            Err(ValidationError::NonPositive { ref name, .. }) if name == "temperature"
        ));
    }

    #[test]
    fn validation_errors_convert_into_load_errors() {
        let s = ProtocolSettings {
            forcefield: crate::settings::ForcefieldSettings { hydrogen_mass: 1.0 },
            ..Default::default()
        };
        let err: SettingsLoadError = EngineParameters::derive(&s).unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid settings: timestep 4 fs too large"));
    }
}
