use console::style;

use wavesim_core::traits::Sample;
use wavesim_core::waveform::Waveform;

/// Print the waveform as a character grid, one plotted point per column.
/// Bit boundaries show as dotted vertical rules and the source bits are
/// labeled under their intervals, like the reference plots students compare against.
pub fn plot(waveform: &Waveform, bits: &str, width: usize, height: usize) {
  if waveform.is_empty() {
    println!("{}", style("(empty waveform)").yellow().dim());
    return;
  }
  let width = width.clamp(1, waveform.len());
  let height = height.max(3);

  let samples: Vec<f32> = waveform.samples.iter().map(|&x| x.into_f32()).collect();
  let lo = samples.iter().cloned().fold(f32::INFINITY, f32::min);
  let hi = samples.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
  let span = (hi - lo).max(1e-6);

  let mut grid = vec![vec![' '; width]; height];
  let bit_count = bits.chars().count();
  for boundary in 1..bit_count {
    let col = boundary * width / bit_count;
    if col < width {
      for row in grid.iter_mut() {
        row[col] = '.';
      }
    }
  }
  for col in 0..width {
    let index = col * samples.len() / width;
    let row = ((hi - samples[index]) / span * (height - 1) as f32).round() as usize;
    grid[row][col] = '*';
  }
  for row in &grid {
    println!("{}", row.iter().collect::<String>());
  }

  if bit_count > 0 {
    let mut labels = vec![' '; width];
    for (index, bit) in bits.chars().enumerate() {
      let col = ((index * 2 + 1) * width / (bit_count * 2)).min(width - 1);
      labels[col] = bit;
    }
    println!("{}", style(labels.iter().collect::<String>()).bold());
  }

  let duration = waveform.time.last().map(|&t| t.into_f32()).unwrap_or(0.0);
  println!(
    "{}",
    style(format!(
      "{} samples over {:.3}s, value range [{lo:.2}, {hi:.2}]",
      waveform.len(),
      duration
    ))
    .dim()
  );
}
