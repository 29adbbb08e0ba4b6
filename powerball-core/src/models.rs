use anyhow::{bail, Result};

/// Un tirage historique : les numéros dans l'ordre où ils ont été tirés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub(crate) numbers: Vec<u32>,
}

impl Draw {
    pub fn new(numbers: Vec<u32>) -> Result<Self> {
        validate_draw(&numbers)?;
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStats {
    pub number: u32,
    pub frequency: usize,
}

pub fn validate_draw(numbers: &[u32]) -> Result<()> {
    if numbers.is_empty() {
        bail!("Tirage vide");
    }
    for &n in numbers {
        if n == 0 {
            bail!("Numéro {} invalide (doit être >= 1)", n);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_draw_ok() {
        assert!(validate_draw(&[5, 10, 15, 20, 25]).is_ok());
        assert!(validate_draw(&[1]).is_ok());
    }

    #[test]
    fn test_validate_draw_empty() {
        assert!(validate_draw(&[]).is_err());
    }

    #[test]
    fn test_validate_draw_zero() {
        assert!(validate_draw(&[0, 2, 3]).is_err());
    }

    #[test]
    fn test_validate_draw_duplicates_allowed() {
        assert!(validate_draw(&[7, 7, 7]).is_ok());
    }

    #[test]
    fn test_draw_keeps_order() {
        let draw = Draw::new(vec![25, 5, 15]).unwrap();
        assert_eq!(draw.numbers(), &[25, 5, 15]);
        assert_eq!(draw.len(), 3);
        assert!(draw.contains(5));
        assert!(!draw.contains(6));
    }

    #[test]
    fn test_draw_new_rejects_invalid() {
        assert!(Draw::new(vec![]).is_err());
        assert!(Draw::new(vec![1, 0]).is_err());
    }
}
