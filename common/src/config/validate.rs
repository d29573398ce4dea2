pub trait Validate: Sized {
    fn validate(&self) -> Result<(), String>;

    fn checked(self) -> Result<Self, String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(self)
    }
}
