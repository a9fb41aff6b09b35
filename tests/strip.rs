mod tests {
    use myrtio_ws281x::{
        LifecycleState, NullDriver, RenderMetrics, RenderObserver, SharedStrip, Strip, StripConfig,
        StripDriver, StripError, StripOptions, StripType,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Configure(usize, StripConfig),
        Transmit(Vec<u8>),
        Brightness(u8),
        Shutdown,
    }

    #[derive(Debug, Default)]
    struct RecordingDriver {
        calls: Vec<Call>,
    }

    impl StripDriver for RecordingDriver {
        fn configure(&mut self, num_leds: usize, config: &StripConfig) {
            self.calls.push(Call::Configure(num_leds, *config));
        }

        fn transmit(&mut self, frame: &[u8]) {
            self.calls.push(Call::Transmit(frame.to_vec()));
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.calls.push(Call::Brightness(brightness));
        }

        fn shutdown(&mut self) {
            self.calls.push(Call::Shutdown);
        }
    }

    #[derive(Debug, Default)]
    struct Recorder {
        before: Vec<Vec<u32>>,
        after: Vec<Vec<u32>>,
    }

    impl RenderObserver for Recorder {
        fn before_render(&mut self, pixels: &[u32]) {
            self.before.push(pixels.to_vec());
        }

        fn after_render(&mut self, pixels: &[u32]) {
            self.after.push(pixels.to_vec());
        }
    }

    type TestStrip<'a> = Strip<'a, RecordingDriver, 16>;

    fn initialized(num_leds: usize, options: &StripOptions) -> TestStrip<'static> {
        let mut strip = TestStrip::new(RecordingDriver::default());
        strip.init(num_leds, options).unwrap();
        strip.driver_mut().calls.clear();
        strip
    }

    fn rgbw_options() -> StripOptions {
        StripOptions {
            rgb_to_rgbw: Some(true),
            strip_type: Some(StripType::Grbw),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_before_init() {
        let mut strip = TestStrip::new(RecordingDriver::default());
        let mut pixels = [1, 2, 3];
        assert_eq!(strip.state(), LifecycleState::Uninitialized);
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::NotInitialized
        );
        assert_eq!(pixels, [1, 2, 3]);
        assert!(strip.driver().calls.is_empty());
    }

    #[test]
    fn test_init_configures_driver() {
        let mut strip = TestStrip::new(RecordingDriver::default());
        strip.init(3, &StripOptions::default()).unwrap();

        assert_eq!(strip.state(), LifecycleState::Initialized);
        assert_eq!(strip.num_leds(), Some(3));
        assert_eq!(strip.config(), Some(&StripConfig::default()));
        assert_eq!(strip.brightness(), Some(255));
        assert_eq!(
            strip.driver().calls,
            vec![
                Call::Configure(3, StripConfig::default()),
                Call::Brightness(255)
            ]
        );

        // fresh frame is all black
        strip.set_brightness(255, true).unwrap();
        assert_eq!(
            strip.driver().calls.last(),
            Some(&Call::Transmit(vec![0; 12]))
        );
    }

    #[test]
    fn test_init_rejects_bad_input() {
        let mut strip = TestStrip::new(RecordingDriver::default());
        assert_eq!(
            strip.init(0, &StripOptions::default()),
            Err(StripError::NoLeds)
        );
        assert_eq!(
            strip.init(17, &StripOptions::default()),
            Err(StripError::TooManyLeds {
                requested: 17,
                capacity: 16
            })
        );
        let options = StripOptions {
            rgb_to_rgbw: Some(true),
            strip_type: Some(StripType::Rgb),
            ..Default::default()
        };
        assert_eq!(
            strip.init(3, &options),
            Err(StripError::RgbwUnsupported(StripType::Rgb))
        );
        assert_eq!(strip.state(), LifecycleState::Uninitialized);
        assert!(strip.driver().calls.is_empty());
    }

    #[test]
    fn test_render_transmits_frame() {
        let mut strip = initialized(2, &StripOptions::default());
        let mut pixels = [0x0001_0203, 0x0405_0607];

        let rendered = strip.render(&mut pixels).unwrap();
        assert_eq!(rendered, &[0x0001_0203, 0x0405_0607]);

        let frame = vec![0x03, 0x02, 0x01, 0x00, 0x07, 0x06, 0x05, 0x04];
        assert_eq!(strip.driver().calls, vec![Call::Transmit(frame)]);
    }

    #[test]
    fn test_render_length_mismatch() {
        let mut strip = initialized(3, &StripOptions::default());
        let mut pixels = [1, 2];
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert!(strip.driver().calls.is_empty());
    }

    #[test]
    fn test_render_full_pipeline() {
        let options = StripOptions {
            gamma_correction: Some(true),
            ..rgbw_options()
        };
        let mut strip = initialized(2, &options);
        strip.set_index_mapping(&[1, 0]).unwrap();

        // remap: [orange, gray]
        // rgbw:  [w=0 orange, w=128 only]
        // gamma: 0x80 -> 0x37
        let mut pixels = [0x0080_8080, 0x00FF_8000];
        strip.render(&mut pixels).unwrap();
        assert_eq!(pixels, [0x00FF_3700, 0x3700_0000]);
        assert_eq!(
            strip.driver().calls,
            vec![Call::Transmit(vec![
                0x00, 0x37, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x37
            ])]
        );
    }

    #[test]
    fn test_rgbw_leaves_black_untouched() {
        let mut strip = initialized(2, &rgbw_options());
        let mut pixels = [0x4200_0000, 0x0080_8080];
        strip.render(&mut pixels).unwrap();
        assert_eq!(pixels, [0x4200_0000, 0x8000_0000]);
    }

    #[test]
    fn test_render_rejects_bad_mapping() {
        let mut strip = initialized(3, &StripOptions::default());
        strip.set_index_mapping(&[0, 1, 5]).unwrap();

        let mut pixels = [1, 2, 3];
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::MappingOutOfRange {
                position: 2,
                index: 5,
                len: 3
            }
        );
        assert_eq!(pixels, [1, 2, 3]);

        strip.set_index_mapping(&[0]).unwrap();
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::MappingTooShort {
                mapping: 1,
                pixels: 3
            }
        );

        strip.clear_index_mapping();
        assert!(strip.render(&mut pixels).is_ok());
        assert!(strip.index_mapping().is_none());
    }

    #[test]
    fn test_set_index_mapping_capacity() {
        let mut strip = TestStrip::new(RecordingDriver::default());
        let mapping: Vec<usize> = (0..17).collect();
        assert_eq!(
            strip.set_index_mapping(&mapping),
            Err(StripError::TooManyLeds {
                requested: 17,
                capacity: 16
            })
        );
    }

    #[test]
    fn test_set_brightness_before_init() {
        let mut strip = TestStrip::new(RecordingDriver::default());
        assert_eq!(
            strip.set_brightness(10, true),
            Err(StripError::NotInitialized)
        );
        assert!(strip.driver().calls.is_empty());
    }

    #[test]
    fn test_set_brightness_raw() {
        let mut strip = initialized(1, &StripOptions::default());
        strip.set_brightness(128, false).unwrap();
        assert_eq!(strip.brightness(), Some(128));
        assert_eq!(strip.driver().calls, vec![Call::Brightness(128)]);
    }

    #[test]
    fn test_set_brightness_gamma_corrected() {
        let options = StripOptions {
            gamma_correction: Some(true),
            ..Default::default()
        };
        let mut strip = initialized(1, &options);
        strip.set_brightness(128, false).unwrap();
        assert_eq!(strip.brightness(), Some(128));
        assert_eq!(strip.driver().calls, vec![Call::Brightness(55)]);
    }

    #[test]
    fn test_initial_brightness_gamma_corrected() {
        let options = StripOptions {
            gamma_correction: Some(true),
            brightness: Some(200),
            ..Default::default()
        };
        let mut strip = TestStrip::new(RecordingDriver::default());
        strip.init(4, &options).unwrap();
        assert_eq!(strip.driver().calls[1], Call::Brightness(149));
        assert_eq!(strip.brightness(), Some(200));
    }

    #[test]
    fn test_set_brightness_auto_render() {
        let mut strip = initialized(1, &StripOptions::default());
        let mut pixels = [0x00AB_CDEF];
        strip.render(&mut pixels).unwrap();
        strip.driver_mut().calls.clear();

        strip.set_brightness(7, true).unwrap();
        assert_eq!(
            strip.driver().calls,
            vec![
                Call::Brightness(7),
                Call::Transmit(vec![0xEF, 0xCD, 0xAB, 0x00])
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut strip = initialized(2, &StripOptions::default());
        strip.set_index_mapping(&[1, 0]).unwrap();

        strip.reset();
        assert_eq!(strip.state(), LifecycleState::Uninitialized);
        assert_eq!(strip.num_leds(), None);
        assert_eq!(strip.driver().calls, vec![Call::Shutdown]);

        let mut pixels = [1, 2];
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::NotInitialized
        );
        assert_eq!(strip.set_brightness(1, true), Err(StripError::NotInitialized));

        // idempotent
        strip.reset();
        assert_eq!(strip.driver().calls, vec![Call::Shutdown]);

        // mapping survives
        assert_eq!(strip.index_mapping().unwrap().as_slice(), &[1, 0]);
        strip.init(2, &StripOptions::default()).unwrap();
        strip.render(&mut pixels).unwrap();
        assert_eq!(pixels, [2, 1]);
    }

    #[test]
    fn test_reinit_replaces_frame() {
        let mut strip = initialized(2, &StripOptions::default());
        strip.init(4, &StripOptions::default()).unwrap();
        assert_eq!(strip.num_leds(), Some(4));
        strip.driver_mut().calls.clear();
        strip.set_brightness(100, true).unwrap();
        assert!(matches!(
            strip.driver().calls.last(),
            Some(Call::Transmit(frame)) if frame.len() == 16
        ));

        let mut pixels = [0; 2];
        assert_eq!(
            strip.render(&mut pixels).unwrap_err(),
            StripError::LengthMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_observers_see_both_stages() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        {
            let mut strip = TestStrip::new(RecordingDriver::default());
            assert!(strip.subscribe(&mut first).is_ok());
            assert!(strip.subscribe(&mut second).is_ok());
            strip.init(2, &rgbw_options()).unwrap();
            strip.set_index_mapping(&[1, 0]).unwrap();

            let mut pixels = [0x00FF_0000, 0x0080_8080];
            strip.render(&mut pixels).unwrap();
        }

        assert_eq!(first.before, vec![vec![0x00FF_0000, 0x0080_8080]]);
        assert_eq!(first.after, vec![vec![0x8000_0000, 0x00FF_0000]]);
        assert_eq!(second.before, first.before);
        assert_eq!(second.after, first.after);
    }

    #[test]
    fn test_observers_skip_rejected_renders() {
        let mut recorder = Recorder::default();
        {
            let mut strip = TestStrip::new(RecordingDriver::default());
            assert!(strip.subscribe(&mut recorder).is_ok());
            let mut pixels = [1];
            assert!(strip.render(&mut pixels).is_err());
        }
        assert!(recorder.before.is_empty());
        assert!(recorder.after.is_empty());
    }

    #[test]
    fn test_unsubscribe_all() {
        let mut recorder = Recorder::default();
        {
            let mut strip = Strip::<_, 4, 1>::new(RecordingDriver::default());
            assert!(strip.subscribe(&mut recorder).is_ok());
            strip.init(1, &StripOptions::default()).unwrap();
            let mut pixels = [1];
            strip.render(&mut pixels).unwrap();

            strip.unsubscribe_all();
            strip.render(&mut pixels).unwrap();
        }
        assert_eq!(recorder.before, vec![vec![1]]);
        assert_eq!(recorder.after, vec![vec![1]]);
    }

    #[test]
    fn test_unsubscribe_all_frees_slots() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        let mut strip = Strip::<_, 4, 1>::new(RecordingDriver::default());
        assert!(strip.subscribe(&mut first).is_ok());
        strip.unsubscribe_all();
        assert!(strip.subscribe(&mut second).is_ok());
    }

    #[test]
    fn test_observer_capacity() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        let mut strip = Strip::<_, 4, 1>::new(RecordingDriver::default());
        assert!(strip.subscribe(&mut first).is_ok());
        assert!(strip.subscribe(&mut second).is_err());
    }

    #[test]
    fn test_render_metrics() {
        let mut metrics = RenderMetrics::new();
        {
            let mut strip = TestStrip::new(RecordingDriver::default());
            assert!(strip.subscribe(&mut metrics).is_ok());
            strip.init(3, &StripOptions::default()).unwrap();
            let mut pixels = [0; 3];
            strip.render(&mut pixels).unwrap();
            strip.render(&mut pixels).unwrap();
        }
        assert_eq!(metrics.frames(), 2);
    }

    #[test]
    fn test_shared_strip() {
        let shared = SharedStrip::new(TestStrip::new(RecordingDriver::default()));

        shared
            .with(|strip| strip.init(2, &StripOptions::default()))
            .unwrap();
        let pixels = shared.with(|strip| {
            let mut pixels = [0x0000_0001, 0x0000_0002];
            strip.render(&mut pixels).map(|rendered| rendered.to_vec())
        });
        assert_eq!(pixels, Ok(vec![1, 2]));
        shared.with(|strip| strip.reset());

        let strip = shared.into_inner();
        assert_eq!(strip.state(), LifecycleState::Uninitialized);
        assert_eq!(strip.driver().calls.len(), 4);
    }

    #[test]
    fn test_null_driver() {
        let mut strip = Strip::<_, 8>::new(NullDriver);
        strip.init(2, &StripOptions::default()).unwrap();
        let mut pixels = [0x0102_0304, 0x0506_0708];
        strip.render(&mut pixels).unwrap();
        assert_eq!(pixels, [0x0102_0304, 0x0506_0708]);
        strip.set_brightness(10, true).unwrap();
        assert_eq!(strip.brightness(), Some(10));
        assert_eq!(strip.state(), LifecycleState::Initialized);
    }
}
