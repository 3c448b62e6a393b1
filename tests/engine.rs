mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_time::{Duration, Instant};
    use sectioned_light_engine::color::{Rgb, apply_brightness};
    use sectioned_light_engine::{
        ButtonId, ButtonInputs, EngineConfig, EngineError, FrameScheduler, InputController,
        LightEngine, Mode, OutputDriver, Renderer, SectionBounds, SectionLayoutError,
        SectionRegistry, SplitMix64, StatusOutputs,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    #[derive(Clone, Default)]
    struct CollectingDriver {
        frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
    }

    impl OutputDriver for CollectingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.borrow_mut().push(colors.to_vec());
        }
    }

    struct NoButtons;

    impl ButtonInputs for NoButtons {
        fn is_pressed(&self, _button: ButtonId) -> bool {
            false
        }
    }

    struct NoIndicators;

    impl StatusOutputs for NoIndicators {
        fn set(&mut self, _button: ButtonId, _on: bool) {}
    }

    fn drop_colors() -> [Rgb; 2] {
        [RED, GREEN]
    }

    #[test]
    fn test_solid_red_frame_end_to_end() {
        let config = EngineConfig::default();
        let mut engine = LightEngine::<256, 4>::new(&config).unwrap();
        for section in engine.registry_mut().iter_mut() {
            section.mode = Mode::SolidColor;
            section.state.solid_color.color = RED;
        }

        let driver = CollectingDriver::default();
        let renderer = Renderer::new(driver.clone(), config.brightness);
        let input = InputController::new(NoButtons, NoIndicators, config.settle_interval);
        let mut scheduler = FrameScheduler::new(engine, renderer, input, config.frame_delay);

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.rendered);

        let frames = driver.frames.borrow();
        assert_eq!(frames.len(), 1);
        let expected = apply_brightness(RED, config.brightness);
        assert_eq!(frames[0].len(), 256);
        assert!(frames[0].iter().all(|led| *led == expected));
    }

    #[test]
    fn test_scheduler_holds_the_frame_delay() {
        let config = EngineConfig::default();
        let engine = LightEngine::<256, 4>::new(&config).unwrap();
        let driver = CollectingDriver::default();
        let renderer = Renderer::new(driver.clone(), config.brightness);
        let input = InputController::new(NoButtons, NoIndicators, config.settle_interval);
        let mut scheduler = FrameScheduler::new(engine, renderer, input, config.frame_delay);

        assert!(scheduler.tick(Instant::from_millis(0)).rendered);

        let early = scheduler.tick(Instant::from_millis(5));
        assert!(!early.rendered);
        assert_eq!(early.sleep_duration, Duration::from_millis(5));
        assert_eq!(early.next_deadline, Instant::from_millis(10));

        assert!(scheduler.tick(Instant::from_millis(10)).rendered);
        // A late tick fires immediately and timing restarts from it.
        let late = scheduler.tick(Instant::from_millis(45));
        assert!(late.rendered);
        assert_eq!(late.next_deadline, Instant::from_millis(55));

        assert_eq!(driver.frames.borrow().len(), 3);
    }

    #[test]
    fn test_registry_rejects_bad_layouts() {
        let mut rng = SplitMix64::new(1);

        let err = SectionRegistry::<64, 4>::from_bounds(
            &[],
            64,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, SectionLayoutError::Empty);

        // Overlap between the first and second section.
        let err = SectionRegistry::<64, 4>::from_bounds(
            &[SectionBounds::new(0, 40), SectionBounds::new(32, 64)],
            64,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, SectionLayoutError::NotContiguous { index: 1 });

        // Gap before the second section.
        let err = SectionRegistry::<64, 4>::from_bounds(
            &[SectionBounds::new(0, 16), SectionBounds::new(20, 64)],
            64,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, SectionLayoutError::NotContiguous { index: 1 });

        // Does not cover the whole strip.
        let err = SectionRegistry::<64, 4>::from_bounds(
            &[SectionBounds::new(0, 32)],
            64,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, SectionLayoutError::NotCovering);

        let err = SectionRegistry::<64, 4>::from_bounds(
            &[SectionBounds::new(0, 0)],
            0,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, SectionLayoutError::EmptySection { index: 0 });
    }

    #[test]
    fn test_equal_partition_absorbs_remainder() {
        let mut rng = SplitMix64::new(1);
        let registry = SectionRegistry::<64, 4>::equal_partition(
            10,
            4,
            Mode::Off,
            20,
            drop_colors(),
            &mut rng,
        )
        .unwrap();

        let lens: Vec<usize> = registry.iter().map(|s| s.len()).collect();
        assert_eq!(lens, [2, 2, 2, 4]);
        assert_eq!(registry.get(3).unwrap().bounds, SectionBounds::new(6, 10));
    }

    #[test]
    fn test_engine_rejects_oversized_matrix() {
        let config = EngineConfig::default();
        let err = LightEngine::<16, 4>::new(&config).unwrap_err();
        assert_eq!(
            err,
            EngineError::TooManyLeds {
                num_leds: 256,
                capacity: 16
            }
        );
    }

    #[test]
    fn test_recolor_interval_rounds_up() {
        let mut config = EngineConfig::default();
        config.frame_delay = Duration::from_millis(10);
        assert_eq!(config.recolor_interval(), 20);
        config.frame_delay = Duration::from_millis(30);
        assert_eq!(config.recolor_interval(), 7);
    }
}
