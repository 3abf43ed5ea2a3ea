use anchor_lang::prelude::*;

#[error_code]
pub enum CrowdfundingError {
    /// 6000 0x1770
    #[msg("Campaign name is too long")]
    NameTooLong,
    /// 6001 0x1771
    #[msg("Campaign description is too long")]
    DescriptionTooLong,
}
