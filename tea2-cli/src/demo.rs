//! Reference scenarios, printed in the format of the TEA2 2006 release.

use tea2::{decrypt, encrypt, Block, Key};

pub const BANNER: &str = "TEA2 by Alexander PUKALL 2006 \n 128-bit block 256-bit key 128 rounds\n\
Code can be freely use even for commercial software\n\
Based on TEA by David Wheeler & Roger M. Needham\n\n";

/// One encrypt-then-decrypt run.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: Key,
    pub plaintext: Block,
}

pub const SCENARIOS: [Scenario; 3] = [
    Scenario { key: Key::new(0, 0, 0, 1), plaintext: Block::new(0, 0) },
    Scenario { key: Key::new(0, 0, 0, 1), plaintext: Block::new(0, 1) },
    Scenario { key: Key::new(0, 0, 0, 1), plaintext: Block::new(1, 1) },
];

/// Result of running a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub ciphertext: Block,
    pub decrypted: Block,
}

impl Scenario {
    pub fn run(&self) -> Outcome {
        let ciphertext = encrypt(self.plaintext, &self.key);
        let decrypted = decrypt(ciphertext, &self.key);
        Outcome { ciphertext, decrypted }
    }

    /// Renders the scenario as numbered in the transcript (starting at 1).
    pub fn render(&self, number: usize) -> String {
        let outcome = self.run();
        format!(
            "Encryption {number}\n\
             Key: {key}\n\
             Plaintext: {pt}\n\
             Ciphertext:{ct}\n\
             Decrypted: {dt}\n\n",
            key = self.key,
            pt = self.plaintext,
            ct = outcome.ciphertext,
            dt = outcome.decrypted,
        )
    }
}

/// The full demo transcript: banner followed by every scenario.
pub fn transcript() -> String {
    let mut out = String::from(BANNER);
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        out.push_str(&scenario.render(i + 1));
    }
    out
}
