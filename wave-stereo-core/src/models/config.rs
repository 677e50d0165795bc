use super::channel_role::ChannelRole;

/// Tolerances and defaults applied by a [`Converter`](crate::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Role used by [`Converter::stereo_to_mono_default`](crate::Converter::stereo_to_mono_default)
    /// and the CLI `to-mono` command when no role is given (default: half-sum).
    pub role: ChannelRole,

    /// Ignore bytes that follow the declared data chunk, such as a trailing
    /// `LIST` chunk (default: true). When false they are rejected.
    ///
    /// This default is more lenient than a reader that unpacks everything
    /// after the header as samples, which fails on any extra bytes.
    /// [`ConversionConfig::strict`] restores that stricter behaviour.
    pub allow_trailing_bytes: bool,

    /// Pair mono inputs recorded at different rates, keeping the left rate
    /// (default: true). When false the pairing fails.
    pub allow_sample_rate_mismatch: bool,
}

impl ConversionConfig {
    /// Configuration that rejects every tolerated anomaly.
    pub fn strict() -> Self {
        Self {
            allow_trailing_bytes: false,
            allow_sample_rate_mismatch: false,
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: ChannelRole) -> Self {
        self.role = role;
        self
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            role: ChannelRole::HalfSum,
            allow_trailing_bytes: true,
            allow_sample_rate_mismatch: true,
        }
    }
}
