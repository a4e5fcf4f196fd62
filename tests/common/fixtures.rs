/// `<body>` with a single `<test>` child
pub const SIMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<body><test>content</test></body>"#;

/// A single `<head>` carrying two attributes and a text value
pub const SINGLE: &str = r#"<head abc="xyz" att2="cis555">test value</head>"#;

/// `<body>` with several children, the second holding the text to match
pub const SIMPLE_MULTIPLE: &str = r#"<body>
<test>first</test>
<test2>match this!</test2>
<test3 kind="last"/>
</body>"#;

/// Nested structure used by the deep-path tests
pub const DEEP: &str = r#"<root>
<a><b att="123"><c>string with quote in c</c></b></a>
<d><e><f><foo>some thing</foo><bar>else</bar></f></e></d>
</root>"#;

/// A small RSS feed
pub const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>NYT &gt; World</title>
    <item><title>First story</title><category domain="nyt">Europe</category></item>
    <item><title>Second story</title><category domain="nyt">Asia</category></item>
  </channel>
</rss>"#;

/// Mixed content: text runs separated by a child element
pub const MIXED: &str = r#"<p>Hello <b>brave</b> new world</p>"#;
