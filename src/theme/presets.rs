use super::AppTheme;

/// Nord - Arctic, bluish palette (default dark theme)
pub fn nord() -> AppTheme {
    AppTheme::from_hex(
        "Nord",
        0x002E_3440, // bg_base - Polar night base
        0x0029_2E39, // bg_sidebar - Darker editor pane
        0x003B_4252, // bg_surface - Card surface
        0x0043_4C5E, // bg_elevated - Input/button background
        0x004C_566A, // bg_hover - Subtle highlight
        0x0055_6076, // bg_active - Active state
        0x00EC_EFF4, // fg_primary - Snow storm text
        0x00D8_DEE9, // fg_secondary - Muted snow
        0x007B_88A1, // fg_muted - Frosted gray
        0x002E_3440, // fg_on_accent - Dark text on frost
        0x0088_C0D0, // accent - Frost cyan
        0x008F_BCBB, // accent_hover - Teal frost
        0x00A3_BE8C, // success - Aurora green
        0x00EB_CB8B, // warning - Aurora yellow
        0x00BF_616A, // danger - Aurora red
        0x003B_4252, // border - Surface border
        0x0088_C0D0, // border_strong - Frost border
        0x0043_4C5E, // divider - Elevated match
    )
}

/// Gruvbox - Retro warm dark palette
pub fn gruvbox() -> AppTheme {
    AppTheme::from_hex(
        "Gruvbox",
        0x0028_2828, // bg_base - Hard dark background
        0x0021_2121, // bg_sidebar - Deeper pane
        0x003C_3836, // bg_surface - Card surface
        0x0050_4945, // bg_elevated - Input/button background
        0x0066_5C54, // bg_hover - Subtle highlight
        0x007C_6F64, // bg_active - Active state
        0x00EB_DBB2, // fg_primary - Warm cream text
        0x00D5_C4A1, // fg_secondary - Muted cream
        0x0092_8374, // fg_muted - Faded gray
        0x0028_2828, // fg_on_accent - Dark on orange
        0x00D6_5D0E, // accent - Bright orange
        0x00FE_8019, // accent_hover - Lighter orange
        0x00B8_BB26, // success - Gruvbox green
        0x00FA_BD2F, // warning - Gruvbox yellow
        0x00FB_4934, // danger - Gruvbox red
        0x003C_3836, // border - Surface border
        0x00D6_5D0E, // border_strong - Orange border
        0x0050_4945, // divider - Elevated match
    )
}

/// One Dark - Atom's classic dark palette
pub fn one_dark() -> AppTheme {
    AppTheme::from_hex(
        "One Dark",
        0x0028_2C34, // bg_base - Editor background
        0x0021_252B, // bg_sidebar - Darker pane
        0x002C_313A, // bg_surface - Card surface
        0x0035_3B45, // bg_elevated - Input/button background
        0x003E_4451, // bg_hover - Subtle highlight
        0x004B_5263, // bg_active - Active state
        0x00AB_B2BF, // fg_primary - Soft light gray text
        0x009D_A5B4, // fg_secondary - Muted gray
        0x005C_6370, // fg_muted - Comment gray
        0x0028_2C34, // fg_on_accent - Dark on blue
        0x0061_AFEF, // accent - One Dark blue
        0x0073_BBF2, // accent_hover - Brighter blue
        0x0098_C379, // success - Green
        0x00E5_C07B, // warning - Yellow
        0x00E0_6C75, // danger - Red
        0x0035_3B45, // border - Elevated border
        0x0061_AFEF, // border_strong - Blue border
        0x002C_313A, // divider - Surface match
    )
}

/// Paper Light - Neutral light theme for bright rooms
pub fn paper_light() -> AppTheme {
    AppTheme::from_hex(
        "Paper Light",
        0x00F5_F2EC, // bg_base - Warm paper white
        0x00EA_E6DD, // bg_sidebar - Slightly deeper pane
        0x00FB_F9F5, // bg_surface - Bright card surface
        0x00FF_FFFF, // bg_elevated - White inputs
        0x00E2_DDD2, // bg_hover - Warm tan hover
        0x00D6_CFC1, // bg_active - Deeper tan active
        0x002D_2A24, // fg_primary - Near-black warm text
        0x005C_5548, // fg_secondary - Medium brown
        0x0099_9181, // fg_muted - Light brown
        0x00FB_F9F5, // fg_on_accent - Light on indigo
        0x004A_55A2, // accent - Muted indigo
        0x005B_68BE, // accent_hover - Brighter indigo
        0x004E_7A3A, // success - Leaf green
        0x00A8_6A12, // warning - Amber
        0x00A8_3232, // danger - Brick red
        0x00D9_D3C7, // border - Warm border
        0x004A_55A2, // border_strong - Indigo border
        0x00EA_E6DD, // divider - Sidebar match
    )
}
