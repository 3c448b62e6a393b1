mod tests {
    use sectioned_light_engine::mode::{MODE_CYCLE, Mode};

    #[test]
    fn test_mode_cycle_identity() {
        for &start in &MODE_CYCLE {
            let mut mode = start;
            for _ in 0..MODE_CYCLE.len() {
                mode = mode.next();
            }
            assert_eq!(mode, start);
        }
    }

    #[test]
    fn test_manual_restarts_the_cycle() {
        assert_eq!(Mode::Manual.next(), Mode::Off);
    }

    #[test]
    fn test_from_raw_accepts_cycle_modes() {
        for (i, &mode) in MODE_CYCLE.iter().enumerate() {
            assert_eq!(Mode::from_raw(u8::try_from(i).unwrap()), Some(mode));
        }
    }

    #[test]
    fn test_from_raw_rejects_unknown() {
        // Manual cannot be configured; neither can anything past it.
        assert_eq!(Mode::from_raw(12), None);
        assert_eq!(Mode::from_raw(255), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for &mode in &MODE_CYCLE {
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::parse_from_str("manual"), None);
        assert_eq!(Mode::parse_from_str("disco"), None);
    }
}
