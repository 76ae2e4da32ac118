use phf::{Map, Set, phf_map, phf_set};

/// Maps three-letter PDB residue names to one-letter amino-acid codes.
///
/// Includes the common protonation-state aliases for histidine (HSD/HSE/HSP)
/// so structures prepared by different tools resolve to the same residue.
pub static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    "HIS" => 'H', "HSD" => 'H', "HSE" => 'H', "HSP" => 'H',
    "ILE" => 'I', "LEU" => 'L', "LYS" => 'K', "MET" => 'M',
    "PHE" => 'F', "PRO" => 'P', "SER" => 'S', "THR" => 'T',
    "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// Residue names treated as solvent water in structure files.
pub static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "TIP3", "TIP4", "SPC",
};

/// Kyte-Doolittle hydropathy index, keyed by one-letter code.
pub static KD_HYDROPATHY: Map<char, f64> = phf_map! {
    'A' => 1.8, 'R' => -4.5, 'N' => -3.5, 'D' => -3.5,
    'C' => 2.5, 'Q' => -3.5, 'E' => -3.5, 'G' => -0.4,
    'H' => -3.2, 'I' => 4.5, 'L' => 3.8, 'K' => -3.9,
    'M' => 1.9, 'F' => 2.8, 'P' => -1.6, 'S' => -0.8,
    'T' => -0.7, 'W' => -0.9, 'Y' => -1.3, 'V' => 4.2,
};

/// Mean side-chain volume in cubic Angstroms (Zamyatnin), keyed by one-letter code.
pub static SIDE_CHAIN_VOLUME: Map<char, f64> = phf_map! {
    'A' => 88.6, 'R' => 173.4, 'N' => 114.1, 'D' => 111.1,
    'C' => 108.5, 'Q' => 143.8, 'E' => 138.4, 'G' => 60.1,
    'H' => 153.2, 'I' => 166.7, 'L' => 166.7, 'K' => 168.6,
    'M' => 162.9, 'F' => 189.9, 'P' => 112.7, 'S' => 89.0,
    'T' => 116.1, 'W' => 227.8, 'Y' => 193.6, 'V' => 140.0,
};

/// Formal side-chain charge at physiological pH, keyed by one-letter code.
pub static FORMAL_CHARGE: Map<char, i32> = phf_map! {
    'A' => 0, 'R' => 1, 'N' => 0, 'D' => -1,
    'C' => 0, 'Q' => 0, 'E' => -1, 'G' => 0,
    'H' => 0, 'I' => 0, 'L' => 0, 'K' => 1,
    'M' => 0, 'F' => 0, 'P' => 0, 'S' => 0,
    'T' => 0, 'W' => 0, 'Y' => 0, 'V' => 0,
};

pub fn is_water_residue(res_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(res_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_to_one_covers_all_twenty_standard_residues() {
        let standard = [
            "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE", "LEU", "LYS",
            "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
        ];
        for name in standard {
            assert!(THREE_TO_ONE.contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn histidine_aliases_resolve_to_h() {
        for alias in ["HIS", "HSD", "HSE", "HSP"] {
            assert_eq!(THREE_TO_ONE.get(alias), Some(&'H'));
        }
    }

    #[test]
    fn scales_cover_every_one_letter_code() {
        for &code in THREE_TO_ONE.values() {
            assert!(KD_HYDROPATHY.contains_key(&code));
            assert!(SIDE_CHAIN_VOLUME.contains_key(&code));
            assert!(FORMAL_CHARGE.contains_key(&code));
        }
    }

    #[test]
    fn is_water_residue_recognizes_common_names() {
        assert!(is_water_residue("HOH"));
        assert!(is_water_residue(" WAT "));
        assert!(!is_water_residue("ALA"));
    }
}
