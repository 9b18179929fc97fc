//! Writes `VolumeData0.h5` and `VolumeData1.h5`: a Gaussian pulse advected
//! across [0, 1] over 8 elements, split between the two files.

const VERSION: u32 = 2;
const N_FILES: usize = 2;
const N_ELEMENTS: usize = 8;
const POINTS_PER_ELEMENT: usize = 5;
const N_OBSERVATIONS: usize = 40;
const SPEED: f64 = 0.5;

fn pulse(x: f64, t: f64) -> f64 {
    let center = (0.2 + SPEED * t).rem_euclid(1.0);
    let sigma: f64 = 0.06;
    (-(x - center).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [-1, 1).
    fn next_signed(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }
}

/// Uniform points of element `k`, both ends included.
fn element_coords(k: usize) -> Vec<f64> {
    let width = 1.0 / N_ELEMENTS as f64;
    (0..POINTS_PER_ELEMENT)
        .map(|i| (k as f64 + i as f64 / (POINTS_PER_ELEMENT - 1) as f64) * width)
        .collect()
}

fn write_component(grid: &hdf5::Group, name: &str, values: &[f64]) -> hdf5::Result<()> {
    grid.new_dataset_builder().with_data(values).create(name)?;
    Ok(())
}

fn main() -> hdf5::Result<()> {
    let mut rng = SimpleRng::new(42);
    let dt = 2.0 / N_OBSERVATIONS as f64;

    for file_index in 0..N_FILES {
        let path = format!("VolumeData{file_index}.h5");
        let file = hdf5::File::create(&path)?;
        let volume = file.create_group("element_data.vol")?;
        volume
            .new_attr::<u32>()
            .shape(())
            .create("version")?
            .write_scalar(&VERSION)?;

        for step in 0..N_OBSERVATIONS {
            let time = step as f64 * dt;
            // Ids are not in time order on purpose.
            let observation = volume.create_group(&format!("ObservationId{}", (step * 7919) % 10007))?;
            observation
                .new_attr::<f64>()
                .shape(())
                .create("observation_value")?
                .write_scalar(&time)?;

            for k in (file_index..N_ELEMENTS).step_by(N_FILES) {
                let grid = observation.create_group(&format!("[B0,(L3I{k})]"))?;
                let x = element_coords(k);
                let analytic: Vec<f64> = x.iter().map(|&xi| pulse(xi, time)).collect();
                let psi: Vec<f64> = analytic
                    .iter()
                    .map(|&a| a + 1e-3 * rng.next_signed())
                    .collect();
                let error: Vec<f64> = psi.iter().zip(&analytic).map(|(p, a)| p - a).collect();
                let connectivity: Vec<i32> = (0..POINTS_PER_ELEMENT as i32 - 1)
                    .flat_map(|i| [i, i + 1])
                    .collect();

                write_component(&grid, "InertialCoordinates_x", &x)?;
                write_component(&grid, "psi", &psi)?;
                write_component(&grid, "psi-Analytic", &analytic)?;
                write_component(&grid, "psi-Error", &error)?;
                grid.new_dataset_builder()
                    .with_data(connectivity.as_slice())
                    .create("connectivity")?;
            }
        }

        println!(
            "Wrote {N_OBSERVATIONS} observations of {} elements to {path}",
            N_ELEMENTS / N_FILES
        );
    }

    Ok(())
}
