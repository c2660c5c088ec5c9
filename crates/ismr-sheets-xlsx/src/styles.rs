//! Static styles part
//!
//! The converter only ever distinguishes two cell formats: the default one
//! and a bold variant applied to header rows. The styles part is therefore a
//! fixed document rather than a pooled table.

/// Cell format index for header-row cells (bold font); format 0 is the
/// default and is left implicit on cells
pub const XF_HEADER: u32 = 1;

/// The complete `xl/styles.xml` part.
///
/// Contains the default and bold fonts, the two fills every consumer expects
/// (`none` and `gray125`), one empty border, and the two cell formats above.
pub const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <fonts count="2">
        <font><sz val="11"/><name val="Calibri"/></font>
        <font><b/><sz val="11"/><name val="Calibri"/></font>
    </fonts>
    <fills count="2">
        <fill><patternFill patternType="none"/></fill>
        <fill><patternFill patternType="gray125"/></fill>
    </fills>
    <borders count="1">
        <border><left/><right/><top/><bottom/><diagonal/></border>
    </borders>
    <cellStyleXfs count="1">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
    </cellStyleXfs>
    <cellXfs count="2">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
        <xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>
    </cellXfs>
</styleSheet>"#;
