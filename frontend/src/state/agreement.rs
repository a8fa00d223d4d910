/// Terms-and-conditions checkbox. Only the user's toggle writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgreementGate {
    agreed: bool,
}

impl AgreementGate {
    pub fn set(&mut self, value: bool) {
        self.agreed = value;
    }

    pub fn is_satisfied(&self) -> bool {
        self.agreed
    }
}
