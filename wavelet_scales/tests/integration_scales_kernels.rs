//! Integration tests for scale ladders and wavelet kernels.
//!
//! Covers the public API end to end: a caller borrows a signal, builds its
//! scale ladder, resolves kernels by name and generates one kernel per scale
//! as a downstream transform would.
use approx::assert_relative_eq;
use ndarray::Array1;
use wavelet_scales::{
    AnalysisConfig, CwtError, ScaleSetBuilder, WaveletAnalysis, WaveletFamily, WaveletLibrary,
    DEFAULT_MORLET_W0,
};

#[test]
fn ladder_properties_over_parameter_sets() {
    for &n in &[3usize, 10, 64, 1000, 4097] {
        for &dt in &[0.01, 1.0, 3.5] {
            for &dj in &[0.05, 0.125, 0.25, 0.5, 1.0] {
                let ladder = ScaleSetBuilder::new(n, dt).with_resolution(dj).scales().unwrap();
                let scales = ladder.as_array();

                let expected_len =
                    ((1.0 / dj) * (n as f64 * dt / (2.0 * dt)).log2()).floor() as usize + 1;
                assert_eq!(scales.len(), expected_len, "n={n} dt={dt} dj={dj}");
                assert_eq!(scales[0], 2.0 * dt);

                for pair in scales.windows(2) {
                    assert!(pair[1] > pair[0]);
                    assert_relative_eq!(pair[1] / pair[0], 2.0_f64.powf(dj), max_relative = 1e-12);
                }
                // Largest scale never exceeds the signal duration
                assert!(scales[scales.len() - 1] <= n as f64 * dt * (1.0 + 1e-12));
            }
        }
    }
}

#[test]
fn documented_example_ladder() {
    let ladder = ScaleSetBuilder::new(256, 1.0).with_resolution(0.125).scales().unwrap();
    let first: Vec<f64> = ladder.iter().take(3).collect();

    assert_eq!(first[0], 2.0);
    assert_relative_eq!(first[1], 2.0 * 2.0_f64.powf(0.125), epsilon = 1e-12);
    assert_relative_eq!(first[2], 2.0 * 2.0_f64.powf(0.25), epsilon = 1e-12);
}

#[test]
fn degenerate_and_invalid_inputs() {
    assert!(matches!(
        ScaleSetBuilder::new(2, 0.5).scales(),
        Err(CwtError::DegenerateSignal { .. })
    ));
    assert!(matches!(
        ScaleSetBuilder::new(1, 10.0).scales(),
        Err(CwtError::DegenerateSignal { .. })
    ));
    assert!(matches!(
        ScaleSetBuilder::new(256, 1.0).with_resolution(0.0).scales(),
        Err(CwtError::InvalidParameter { .. })
    ));
    assert!(matches!(
        ScaleSetBuilder::new(256, -1.0).scales(),
        Err(CwtError::InvalidParameter { .. })
    ));
}

#[test]
fn kernel_bank_from_analysis() {
    let signal = Array1::from_shape_fn(512, |i| (i as f64 * 0.1).sin());
    let config = AnalysisConfig::default().with_dt(0.5).with_dj(0.25);
    let analysis = WaveletAnalysis::with_config(signal.view(), config);
    let ladder = analysis.scales().unwrap();

    let library = WaveletLibrary::new();
    for name in library.names() {
        let kernel = library.kernel_for(name).unwrap();
        let family = library.family(name).unwrap();

        for scale in ladder.iter() {
            // Ten scale-widths of support either side, at least one sample
            let length = ((10.0 * scale / analysis.dt()).ceil() as usize).min(analysis.len()).max(1);
            let width = if family.is_complex() {
                DEFAULT_MORLET_W0
            } else {
                scale / analysis.dt()
            };
            let psi = kernel(length, width).unwrap();
            assert_eq!(psi.len(), length);
            assert_eq!(psi.is_complex(), family.is_complex());
        }
    }
    // Signal untouched
    assert_relative_eq!(signal[10], 1.0_f64.sin(), epsilon = 1e-15);
}

#[test]
fn dog2_and_ricker_are_interchangeable() {
    let library = WaveletLibrary::new();
    assert_eq!(library.family("dog2").unwrap(), library.family("ricker").unwrap());

    let dog2 = library.kernel_for("dog2").unwrap()(257, 8.0).unwrap();
    let ricker = library.kernel_for("ricker").unwrap()(257, 8.0).unwrap();
    assert_eq!(dog2, ricker);
}

#[test]
fn morlet_example_kernel() {
    let psi = WaveletLibrary::new().kernel_for("morlet").unwrap()(64, 5.0).unwrap();
    let psi = psi.as_complex().expect("morlet is complex");
    assert_eq!(psi.len(), 64);
    assert!(psi.iter().any(|c| c.im.abs() > 1e-3));
}

#[test]
fn unknown_family_is_reported_by_name() {
    let err = WaveletLibrary::new().kernel_for("paul").unwrap_err();
    assert_eq!(err, CwtError::UnknownFamily("paul".to_string()));
    assert!("paul".parse::<WaveletFamily>().is_err());
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WaveletLibrary>();
    assert_send_sync::<ScaleSetBuilder>();
    assert_send_sync::<wavelet_scales::ScaleLadder>();
    assert_send_sync::<WaveletAnalysis<'static>>();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| ScaleSetBuilder::new(1024, 1.0).scales().unwrap()))
        .collect();
    let ladders: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ladders.windows(2).all(|w| w[0] == w[1]));
}
