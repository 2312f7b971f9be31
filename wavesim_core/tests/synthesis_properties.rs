use rand::{distributions::Standard, Rng};

use wavesim_core::{
  helper::parse_bits,
  line_code::LineCoder,
  modulation::Modulator,
  scheme::{LineCodeScheme, ModulationScheme},
  SignalConfig,
};

const TESTS: usize = 100;
const MAX_BITS: usize = 64;

fn random_bit_string() -> String {
  let mut rng = rand::thread_rng();
  let len = rng.gen_range(0..MAX_BITS);
  rng
    .sample_iter::<bool, _>(Standard)
    .take(len)
    .map(|bit| if bit { '1' } else { '0' })
    .collect()
}

/// for every valid bit string and scheme,
/// `len(time_axis) == len(samples) == len(bits) * samples_per_bit`
#[test]
fn length_invariant() {
  let config = SignalConfig::default();
  let samples_per_bit = config.samples_per_bit();
  let coder = LineCoder::new(&config);
  let modulator = Modulator::new(&config);

  for _ in 0..TESTS {
    let input = random_bit_string();
    let bits = parse_bits(&input).unwrap();
    let expected = bits.len() * samples_per_bit;

    for scheme in LineCodeScheme::ALL {
      let wave = coder.encode(&bits, scheme);
      assert_eq!(wave.time.len(), expected, "{scheme} time axis of {input:?}");
      assert_eq!(wave.samples.len(), expected, "{scheme} samples of {input:?}");
    }
    for scheme in ModulationScheme::ALL {
      let wave = modulator.modulate(&bits, scheme);
      assert_eq!(wave.time.len(), expected, "{scheme} time axis of {input:?}");
      assert_eq!(wave.samples.len(), expected, "{scheme} samples of {input:?}");
    }
  }
}

/// calling the same function twice with identical inputs
/// yields bit-for-bit identical output arrays
#[test]
fn deterministic_synthesis() {
  let config = SignalConfig::default();
  let coder = LineCoder::new(&config);
  let modulator = Modulator::new(&config);

  for _ in 0..TESTS {
    let bits = parse_bits(&random_bit_string()).unwrap();

    for scheme in LineCodeScheme::ALL {
      assert_eq!(coder.encode(&bits, scheme), coder.encode(&bits, scheme));
    }
    for scheme in ModulationScheme::ALL {
      assert_eq!(modulator.modulate(&bits, scheme), modulator.modulate(&bits, scheme));
    }
    assert_eq!(modulator.modulate_all(&bits), modulator.modulate_all(&bits));
  }
}
