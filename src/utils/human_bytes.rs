/// Affichage lisible d'une taille mémoire (B, KB, MB, GB ; base 1024)
pub trait HumanBytes {
    fn byte_count(&self) -> f64;

    fn human_bytes(&self) -> String {
        const UNITS: [(&str, f64); 3] = [
            ("GB", 1024.0 * 1024.0 * 1024.0),
            ("MB", 1024.0 * 1024.0),
            ("KB", 1024.0),
        ];
        let size = self.byte_count();
        UNITS
            .iter()
            .find(|(_, scale)| size.abs() >= *scale)
            .map(|(unit, scale)| format!("{:.2} {unit}", size / scale))
            .unwrap_or_else(|| format!("{size} B"))
    }
}

macro_rules! impl_human_bytes {
    ($($t:ty),*) => {
        $(
            impl HumanBytes for $t {
                fn byte_count(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_human_bytes!(usize, isize, u64, i64, u32, i32);
