/// 信号模拟模块综合测试
///
/// 覆盖路径损耗模型的确定性性质、零距离保护、噪声统计特性，
/// 以及指纹生成的长度和规范顺序保证。

#[cfg(test)]
mod tests {
    use fpnav::simulation::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::Rng;

    fn reference_generator() -> FingerprintGenerator {
        let emitters = EmitterSet::from_vec(vec![
            Emitter::wifi("wifi_1"),
            Emitter::wifi("wifi_2"),
            Emitter::wifi("wifi_3"),
            Emitter::ble("ble_1"),
            Emitter::ble("ble_2"),
        ]);
        FingerprintGenerator::new(emitters, SignalModel::default())
    }

    #[test]
    fn test_path_loss_reference_constants() {
        let model = SignalModel::default();
        // 单位距离处强度等于参考值 A = -30
        assert!((model.expected_strength(1.0) - (-30.0)).abs() < 1e-12);
        // 10 倍距离衰减 10 * n = 20 dB
        assert!((model.expected_strength(10.0) - (-50.0)).abs() < 1e-12);
    }

    #[test]
    fn test_path_loss_monotonic_non_increasing() {
        let model = SignalModel::default();
        let mut prev = f64::INFINITY;
        for i in 1..=1000 {
            let d = i as f64 * 0.05;
            let strength = model.expected_strength(d);
            assert!(
                strength <= prev,
                "路径损耗在 d={:.2} 处出现增强: {} > {}",
                d,
                strength,
                prev
            );
            prev = strength;
        }
    }

    #[test]
    fn test_zero_distance_never_panics() {
        let model = SignalModel::default().with_noise_sigma(0.0);
        let mut rng1 = StdRng::seed_from_u64(21);
        let mut rng2 = StdRng::seed_from_u64(21);

        // 零距离夹到下限 0.1，行为与 0.1 完全一致
        let at_zero = model.simulate(0.0, &mut rng1);
        let at_floor = model.simulate(0.1, &mut rng2);
        assert!(at_zero.is_finite());
        assert_eq!(at_zero, at_floor);
    }

    #[test]
    fn test_noise_statistics() {
        let model = SignalModel::default(); // sigma = 2.0
        let mut rng = StdRng::seed_from_u64(7);
        let n = 2000;

        let readings: Vec<f64> = (0..n).map(|_| model.simulate(1.0, &mut rng)).collect();
        let mean = readings.iter().sum::<f64>() / n as f64;
        let variance =
            readings.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / (n - 1) as f64;

        // 均值接近期望强度 -30，标准差接近配置值 2.0
        assert!((mean - (-30.0)).abs() < 0.2, "均值偏离过大: {mean}");
        assert!(
            (variance.sqrt() - 2.0).abs() < 0.2,
            "标准差偏离过大: {}",
            variance.sqrt()
        );
    }

    #[test]
    fn test_generate_always_full_length() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..100 {
            let fingerprint = generator.generate(&mut rng);
            assert_eq!(fingerprint.len(), 5);
            assert!(fingerprint.readings().iter().all(|r| r.is_finite()));
        }
    }

    #[test]
    fn test_generate_canonical_order() {
        let generator = reference_generator();

        // 生成结果必须与按规范顺序手工重放的抽样序列一致
        let mut rng = StdRng::seed_from_u64(17);
        let fingerprint = generator.generate(&mut rng);

        let mut replay = StdRng::seed_from_u64(17);
        let mut expected = Vec::new();
        for emitter in generator.emitters().iter() {
            let (lo, hi) = emitter.distance_range();
            let distance = replay.gen_range(lo..=hi);
            expected.push(generator.model().simulate(distance, &mut replay));
        }

        assert_eq!(fingerprint.readings(), expected.as_slice());
    }

    #[test]
    fn test_generate_at_fixed_distance() {
        let emitters = EmitterSet::from_vec(vec![Emitter::wifi("wifi_1"), Emitter::ble("ble_1")]);
        let model = SignalModel::default().with_noise_sigma(0.0);
        let generator = FingerprintGenerator::new(emitters, model.clone());
        let mut rng = StdRng::seed_from_u64(1);

        let fingerprint = generator.generate_at(4.0, &mut rng);
        for reading in fingerprint.readings() {
            assert_eq!(*reading, model.expected_strength(4.0));
        }
    }

    #[test]
    fn test_independent_streams_are_reproducible() {
        // 两条独立随机流各自可复现，互不影响
        let generator = reference_generator();

        let mut stream_a = StdRng::seed_from_u64(100);
        let mut stream_b = StdRng::seed_from_u64(200);
        let first_a = generator.generate(&mut stream_a);
        let first_b = generator.generate(&mut stream_b);

        let mut replay_a = StdRng::seed_from_u64(100);
        let mut replay_b = StdRng::seed_from_u64(200);
        assert_eq!(generator.generate(&mut replay_a), first_a);
        assert_eq!(generator.generate(&mut replay_b), first_b);
    }
}
