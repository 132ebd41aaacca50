// @generated by `tagkit-gen generate`. Do not edit by hand.

elements! {
    /// Represents the root (top-level element) of an HTML document, so it is also referred to as the root element. All other elements must be descendants of this element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/html)
    html => Html, "html", Html, false;

    /// Specifies the base URL to use for all relative URLs in a document. There can be only one such element in a document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/base)
    base => Base, "base", Html, true;

    /// Contains machine-readable information (metadata) about the document, like its title, scripts, and style sheets.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/head)
    head => Head, "head", Html, false;

    /// Specifies relationships between the current document and an external resource. This element is most commonly used to link to CSS but is also used to establish site icons among other things.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/link)
    link => Link, "link", Html, true;

    /// Represents metadata that cannot be represented by other HTML meta-related elements, like `<base>`, `<link>`, `<script>`, `<style>` and `<title>`.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/meta)
    meta => Meta, "meta", Html, true;

    /// Contains style information for a document or part of a document. It contains CSS, which is applied to the contents of the document containing this element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/style)
    style => Style, "style", Html, false;

    /// Defines the document's title that is shown in a browser's title bar or a page's tab. It only contains text; tags within the element are ignored.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/title)
    title => Title, "title", Html, false;

    /// Represents the content of an HTML document. There can be only one such element in a document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/body)
    body => Body, "body", Html, false;

    /// Indicates that the enclosed HTML provides contact information for a person or people, or for an organization.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/address)
    address => Address, "address", Html, false;

    /// Represents a self-contained composition in a document, page, application, or site, which is intended to be independently distributable or reusable (e.g., in syndication).
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/article)
    article => Article, "article", Html, false;

    /// Represents a portion of a document whose content is only indirectly related to the document's main content. Asides are frequently presented as sidebars or call-out boxes.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/aside)
    aside => Aside, "aside", Html, false;

    /// Represents a footer for its nearest ancestor sectioning content or sectioning root element. A `<footer>` typically contains information about the author of the section, copyright data, or links to related documents.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/footer)
    footer => Footer, "footer", Html, false;

    /// Represents introductory content, typically a group of introductory or navigational aids. It may contain some heading elements but also a logo, a search form, an author name, and other elements.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/header)
    header => Header, "header", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h1 => H1, "h1", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h2 => H2, "h2", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h3 => H3, "h3", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h4 => H4, "h4", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h5 => H5, "h5", Html, false;

    /// Represent six levels of section headings. `<h1>` is the highest section level and `<h6>` is the lowest.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    h6 => H6, "h6", Html, false;

    /// Represents a heading grouped with any secondary content, such as subheadings, an alternative title, or a tagline.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/hgroup)
    heading_group => HeadingGroup, "hgroup", Html, false;

    /// Represents the dominant content of the body of a document. The main content area consists of content that is directly related to or expands upon the central topic of a document, or the central functionality of an application.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/main)
    main => Main, "main", Html, false;

    /// Represents a section of a page whose purpose is to provide navigation links, either within the current document or to other documents. Common examples of navigation sections are menus, tables of contents, and indexes.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/nav)
    navigation => Navigation, "nav", Html, false;

    /// Represents a generic standalone section of a document, which doesn't have a more specific semantic element to represent it. Sections should always have a heading, with very few exceptions.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/section)
    section => Section, "section", Html, false;

    /// Represents a part that contains a set of form controls or other content related to performing a search or filtering operation.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/search)
    search => Search, "search", Html, false;

    /// Indicates that the enclosed text is an extended quotation. Usually, this is rendered visually by indentation. A URL for the source of the quotation may be given using the cite attribute.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/blockquote)
    block_quote => BlockQuote, "blockquote", Html, false;

    /// Provides the description, definition, or value for the preceding term (`<dt>`) in a description list (`<dl>`).
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dd)
    description_details => DescriptionDetails, "dd", Html, false;

    /// The generic container for flow content. It has no effect on the content or layout until styled in some way using CSS.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/div)
    div => Div, "div", Html, false;

    /// Represents a description list. The element encloses a list of groups of terms (specified using the `<dt>` element) and descriptions (provided by `<dd>` elements).
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dl)
    description_list => DescriptionList, "dl", Html, false;

    /// Specifies a term in a description or definition list, and as such must be used inside a `<dl>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dt)
    description_term => DescriptionTerm, "dt", Html, false;

    /// Represents a caption or legend describing the rest of the contents of its parent `<figure>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/figcaption)
    figure_caption => FigureCaption, "figcaption", Html, false;

    /// Represents self-contained content, potentially with an optional caption, which is specified using the `<figcaption>` element. The figure, its caption, and its contents are referenced as a single unit.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/figure)
    figure => Figure, "figure", Html, false;

    /// Represents a thematic break between paragraph-level elements: for example, a change of scene in a story, or a shift of topic within a section.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/hr)
    horizontal_rule => HorizontalRule, "hr", Html, true;

    /// Represents an item in a list. It must be contained in a parent element: an ordered list (`<ol>`), an unordered list (`<ul>`), or a menu (`<menu>`).
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/li)
    list_item => ListItem, "li", Html, false;

    /// A semantic alternative to `<ul>`, but treated by browsers (and exposed through the accessibility tree) as no different than `<ul>`. It represents an unordered list of items.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/menu)
    menu => Menu, "menu", Html, false;

    /// Represents an ordered list of items, typically rendered as a numbered list.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ol)
    ordered_list => OrderedList, "ol", Html, false;

    /// Represents a paragraph. Paragraphs are usually represented in visual media as blocks of text separated from adjacent blocks by blank lines and/or first-line indentation.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/p)
    paragraph => Paragraph, "p", Html, false;

    /// Represents preformatted text which is to be presented exactly as written in the HTML file. The text is typically rendered using a non-proportional, or monospaced, font.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/pre)
    preformatted => Preformatted, "pre", Html, false;

    /// Represents an unordered list of items, typically rendered as a bulleted list.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ul)
    unordered_list => UnorderedList, "ul", Html, false;

    /// Together with its href attribute, creates a hyperlink to web pages, files, email addresses, locations within the current page, or anything else a URL can address.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/a)
    anchor => Anchor, "a", Html, false;

    /// Represents an abbreviation or acronym.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/abbr)
    abbreviation => Abbreviation, "abbr", Html, false;

    /// Used to draw the reader's attention to the element's contents, which are not otherwise granted special importance.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/b)
    bold => Bold, "b", Html, false;

    /// Tells the browser's bidirectional algorithm to treat the text it contains in isolation from its surrounding text.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/bdi)
    bidirectional_isolate => BidirectionalIsolate, "bdi", Html, false;

    /// Overrides the current directionality of text, so that the text within is rendered in a different direction.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/bdo)
    bidirectional_override => BidirectionalOverride, "bdo", Html, false;

    /// Produces a line break in text (carriage-return). It is useful for writing a poem or an address, where the division of lines is significant.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/br)
    line_break => LineBreak, "br", Html, true;

    /// Used to mark up the title of a cited creative work. The reference may be in an abbreviated form according to context-appropriate conventions related to citation metadata.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/cite)
    cite => Cite, "cite", Html, false;

    /// Displays its contents styled in a fashion intended to indicate that the text is a short fragment of computer code.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/code)
    code => Code, "code", Html, false;

    /// Links a given piece of content with a machine-readable translation. If the content is time- or date-related, the `<time>` element must be used.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/data)
    data => Data, "data", Html, false;

    /// Used to indicate the term being defined within the context of a definition phrase or sentence.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dfn)
    definition => Definition, "dfn", Html, false;

    /// Marks text that has stress emphasis. The `<em>` element can be nested, with each level of nesting indicating a greater degree of emphasis.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/em)
    emphasis => Emphasis, "em", Html, false;

    /// Represents a range of text that is set off from the normal text for some reason, such as idiomatic text, technical terms, taxonomical designations, among others.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/i)
    italic => Italic, "i", Html, false;

    /// Represents a span of inline text denoting textual user input from a keyboard, voice input, or any other text entry device.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/kbd)
    keyboard => Keyboard, "kbd", Html, false;

    /// Represents text which is marked or highlighted for reference or notation purposes due to the marked passage's relevance in the enclosing context.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/mark)
    mark => Mark, "mark", Html, false;

    /// Indicates that the enclosed text is a short inline quotation. Most modern browsers implement this by surrounding the text in quotation marks.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/q)
    quote => Quote, "q", Html, false;

    /// Used to provide fall-back parentheses for browsers that do not support display of ruby annotations using the `<ruby>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/rp)
    ruby_fallback => RubyFallback, "rp", Html, false;

    /// Specifies the ruby text component of a ruby annotation, which is used to provide pronunciation, translation, or transliteration information for East Asian typography.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/rt)
    ruby_text => RubyText, "rt", Html, false;

    /// Represents small annotations that are rendered above, below, or next to base text, usually used for showing the pronunciation of East Asian characters.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ruby)
    ruby => Ruby, "ruby", Html, false;

    /// Renders text with a strikethrough, or a line through it. Use the `<s>` element to represent things that are no longer relevant or no longer accurate.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/s)
    strikethrough => Strikethrough, "s", Html, false;

    /// Used to enclose inline text which represents sample (or quoted) output from a computer program.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/samp)
    sample => Sample, "samp", Html, false;

    /// Represents side-comments and small print, like copyright and legal text, independent of its styled presentation.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/small)
    small => Small, "small", Html, false;

    /// A generic inline container for phrasing content, which does not inherently represent anything. It can be used to group elements for styling purposes.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/span)
    span => Span, "span", Html, false;

    /// Indicates that its contents have strong importance, seriousness, or urgency. Browsers typically render the contents in bold type.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/strong)
    strong => Strong, "strong", Html, false;

    /// Specifies inline text which should be displayed as subscript for solely typographical reasons.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/sub)
    subscript => Subscript, "sub", Html, false;

    /// Specifies inline text which is to be displayed as superscript for solely typographical reasons.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/sup)
    superscript => Superscript, "sup", Html, false;

    /// Represents a specific period in time. It may include the datetime attribute to translate dates into machine-readable format.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/time)
    time => Time, "time", Html, false;

    /// Represents a span of inline text which should be rendered in a way that indicates that it has a non-textual annotation.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/u)
    underline => Underline, "u", Html, false;

    /// Represents the name of a variable in a mathematical expression or a programming context.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/var)
    variable => Variable, "var", Html, false;

    /// Represents a word break opportunity: a position within text where the browser may optionally break a line.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/wbr)
    word_break => WordBreak, "wbr", Html, true;

    /// Defines an area inside an image map that has predefined clickable areas. An image map allows geometric areas on an image to be associated with hyperlinks.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/area)
    area => Area, "area", Html, true;

    /// Used to embed sound content in documents. It may contain one or more audio sources, represented using the src attribute or the `<source>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/audio)
    audio => Audio, "audio", Html, false;

    /// Embeds an image into the document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/img)
    image => Image, "img", Html, true;

    /// Used with `<area>` elements to define an image map (a clickable link area).
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/map)
    map => Map, "map", Html, false;

    /// Used as a child of the media elements, audio and video. It lets you specify timed text tracks (or time-based data), for example to automatically handle subtitles.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/track)
    track => Track, "track", Html, true;

    /// Embeds a media player which supports video playback into the document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/video)
    video => Video, "video", Html, false;

    /// Embeds external content at the specified point in the document. This content is provided by an external application or other source of interactive content such as a browser plug-in.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/embed)
    embed => Embed, "embed", Html, true;

    /// Represents a nested browsing context, like `<iframe>` but with more native privacy features built in.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/fencedframe)
    fencedframe => Fencedframe, "fencedframe", Html, false;

    /// Represents a nested browsing context, embedding another HTML page into the current one.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/iframe)
    inline_frame => InlineFrame, "iframe", Html, false;

    /// Represents an external resource, which can be treated as an image, a nested browsing context, or a resource to be handled by a plugin.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/object)
    object => Object, "object", Html, false;

    /// Contains zero or more `<source>` elements and one `<img>` element to offer alternative versions of an image for different display/device scenarios.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/picture)
    picture => Picture, "picture", Html, false;

    /// Specifies multiple media resources for the picture, the audio element, or the video element. It is a void element, meaning that it has no content and does not have a closing tag.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/source)
    source => Source, "source", Html, true;

    /// Container element to use with either the canvas scripting API or the WebGL API to draw graphics and animations.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/canvas)
    canvas => Canvas, "canvas", Html, false;

    /// Defines a section of HTML to be inserted if a script type on the page is unsupported or if scripting is currently turned off in the browser.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/noscript)
    no_script => NoScript, "noscript", Html, false;

    /// Used to embed executable code or data; this is typically used to embed or refer to JavaScript code.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script)
    script => Script, "script", Html, false;

    /// Represents a range of text that has been deleted from a document. This can be used when rendering "track changes" or source code diff information, for example.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/del)
    deleted => Deleted, "del", Html, false;

    /// Represents a range of text that has been added to a document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/ins)
    inserted => Inserted, "ins", Html, false;

    /// Specifies the caption (or title) of a table.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/caption)
    caption => Caption, "caption", Html, false;

    /// Defines one or more columns in a column group represented by its implicit or explicit parent `<colgroup>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/col)
    column => Column, "col", Html, true;

    /// Defines a group of columns within a table.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/colgroup)
    column_group => ColumnGroup, "colgroup", Html, false;

    /// Represents tabular data: information presented in a two-dimensional table comprised of rows and columns of cells containing data.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/table)
    table => Table, "table", Html, false;

    /// Encapsulates a set of table rows (`<tr>` elements), indicating that they comprise the body of a table's (main) data.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tbody)
    table_body => TableBody, "tbody", Html, false;

    /// A child of the `<tr>` element, it defines a cell of a table that contains data.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/td)
    table_cell => TableCell, "td", Html, false;

    /// Encapsulates a set of table rows (`<tr>` elements), indicating that they comprise the foot of a table with information about the table's columns.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tfoot)
    table_foot => TableFoot, "tfoot", Html, false;

    /// A child of the `<tr>` element, it defines a cell as the header of a group of table cells.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/th)
    table_header => TableHeader, "th", Html, false;

    /// Encapsulates a set of table rows (`<tr>` elements), indicating that they comprise the head of a table with information about the table's columns.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/thead)
    table_head => TableHead, "thead", Html, false;

    /// Defines a row of cells in a table. The row's cells can then be established using a mix of `<td>` (data cell) and `<th>` (header cell) elements.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/tr)
    table_row => TableRow, "tr", Html, false;

    /// An interactive element activated by a user with a mouse, keyboard, finger, voice command, or other assistive technology. Once activated, it performs an action, such as submitting a form or opening a dialog.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/button)
    button => Button, "button", Html, false;

    /// Contains a set of `<option>` elements that represent the permissible or recommended options available to choose from within other controls.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/datalist)
    data_list => DataList, "datalist", Html, false;

    /// Used to group several controls as well as labels (`<label>`) within a web form.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/fieldset)
    field_set => FieldSet, "fieldset", Html, false;

    /// Represents a document section containing interactive controls for submitting information.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/form)
    form => Form, "form", Html, false;

    /// Used to create interactive controls for web-based forms to accept data from the user; a wide variety of types of input data and control widgets are available.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input)
    input => Input, "input", Html, true;

    /// Represents a caption for an item in a user interface.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/label)
    label => Label, "label", Html, false;

    /// Represents a caption for the content of its parent `<fieldset>`.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/legend)
    legend => Legend, "legend", Html, false;

    /// Represents either a scalar value within a known range or a fractional value.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/meter)
    meter => Meter, "meter", Html, false;

    /// Creates a grouping of options within a `<select>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/optgroup)
    option_group => OptionGroup, "optgroup", Html, false;

    /// Used to define an item contained in a select, an `<optgroup>`, or a `<datalist>` element. As such, `<option>` can represent menu items in popups and other lists of items in an HTML document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/option)
    option => Option, "option", Html, false;

    /// Container element into which a site or app can inject the results of a calculation or the outcome of a user action.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/output)
    output => Output, "output", Html, false;

    /// Displays an indicator showing the completion progress of a task, typically displayed as a progress bar.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/progress)
    progress => Progress, "progress", Html, false;

    /// Represents a control that provides a menu of options.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/select)
    select => Select, "select", Html, false;

    /// Displays the content of the currently selected `<option>` inside a closed `<select>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/selectedcontent)
    selectedcontent => Selectedcontent, "selectedcontent", Html, false;

    /// Represents a multi-line plain-text editing control, useful when you want to allow users to enter a sizeable amount of free-form text, for example, a comment on a review or feedback form.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/textarea)
    text_area => TextArea, "textarea", Html, false;

    /// Creates a disclosure widget in which information is visible only when the widget is toggled into an "open" state. A summary or label must be provided using the `<summary>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/details)
    details => Details, "details", Html, false;

    /// Represents a dialog box or other interactive component, such as a dismissible alert, inspector, or subwindow.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dialog)
    dialog => Dialog, "dialog", Html, false;

    /// Specifies a summary, caption, or legend for a details element's disclosure box. Clicking the `<summary>` element toggles the state of the parent `<details>` element open and closed.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/summary)
    summary => Summary, "summary", Html, false;

    /// Part of the Web Components technology suite, this element is a placeholder inside a web component that you can fill with your own markup, which lets you create separate DOM trees and present them together.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/slot)
    slot => Slot, "slot", Html, false;

    /// A mechanism for holding HTML that is not to be rendered immediately when a page is loaded but may be instantiated subsequently during runtime using JavaScript.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/template)
    template => Template, "template", Html, false;

    /// Creates a hyperlink to other web pages, files, locations in the same page, email addresses, or any other URL.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/a)
    svg_anchor => SvgAnchor, "a", Svg, false;

    /// Provides a way to animate an attribute of an element over time.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animate)
    svg_animate => SvgAnimate, "animate", Svg, false;

    /// Provides a way to define how an element moves along a motion path.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateMotion)
    svg_animate_motion => SvgAnimateMotion, "animateMotion", Svg, false;

    /// Animates a transformation attribute on its target element, thereby allowing animations to control translation, scaling, rotation, and/or skewing.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateTransform)
    svg_animate_transform => SvgAnimateTransform, "animateTransform", Svg, false;

    /// An SVG basic shape, used to draw circles based on a center point and a radius.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle)
    svg_circle => SvgCircle, "circle", Svg, false;

    /// Defines a clipping path, to be used by the clip-path property.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/clipPath)
    svg_clip_path => SvgClipPath, "clipPath", Svg, false;

    /// Used to store graphical objects that will be used at a later time.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/defs)
    svg_defs => SvgDefs, "defs", Svg, false;

    /// Provides an accessible, long-text description of any SVG container element or graphics element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/desc)
    svg_desc => SvgDesc, "desc", Svg, false;

    /// An SVG basic shape, used to create ellipses based on a center coordinate, and both their x and y radius.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/ellipse)
    svg_ellipse => SvgEllipse, "ellipse", Svg, false;

    /// Composes two objects together ruled by a certain blending mode.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feBlend)
    svg_fe_blend => SvgFeBlend, "feBlend", Svg, false;

    /// Changes colors based on a transformation matrix.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feColorMatrix)
    svg_fe_color_matrix => SvgFeColorMatrix, "feColorMatrix", Svg, false;

    /// Performs color-component-wise remapping of data for each pixel.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feComponentTransfer)
    svg_fe_component_transfer => SvgFeComponentTransfer, "feComponentTransfer", Svg, false;

    /// Performs the combination of two input images pixel-wise in image space using one of the Porter-Duff compositing operations.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feComposite)
    svg_fe_composite => SvgFeComposite, "feComposite", Svg, false;

    /// Applies a matrix convolution filter effect.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feConvolveMatrix)
    svg_fe_convolve_matrix => SvgFeConvolveMatrix, "feConvolveMatrix", Svg, false;

    /// Lights an image using the alpha channel as a bump map.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDiffuseLighting)
    svg_fe_diffuse_lighting => SvgFeDiffuseLighting, "feDiffuseLighting", Svg, false;

    /// Uses the pixel values from the image from in2 to spatially displace the image from in.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDisplacementMap)
    svg_fe_displacement_map => SvgFeDisplacementMap, "feDisplacementMap", Svg, false;

    /// Specifies a distant light source to be used inside a lighting filter primitive.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDistantLight)
    svg_fe_distant_light => SvgFeDistantLight, "feDistantLight", Svg, false;

    /// Creates a drop shadow of the input image.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDropShadow)
    svg_fe_drop_shadow => SvgFeDropShadow, "feDropShadow", Svg, false;

    /// Fills the filter subregion with the color and opacity defined by flood-color and flood-opacity.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFlood)
    svg_fe_flood => SvgFeFlood, "feFlood", Svg, false;

    /// Defines the transfer function for the alpha component of the input graphic of its parent `<feComponentTransfer>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncA)
    svg_fe_func_a => SvgFeFuncA, "feFuncA", Svg, false;

    /// Defines the transfer function for the blue component of the input graphic of its parent `<feComponentTransfer>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncB)
    svg_fe_func_b => SvgFeFuncB, "feFuncB", Svg, false;

    /// Defines the transfer function for the green component of the input graphic of its parent `<feComponentTransfer>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncG)
    svg_fe_func_g => SvgFeFuncG, "feFuncG", Svg, false;

    /// Defines the transfer function for the red component of the input graphic of its parent `<feComponentTransfer>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncR)
    svg_fe_func_r => SvgFeFuncR, "feFuncR", Svg, false;

    /// Blurs the input image by the amount specified in stdDeviation, which defines the bell-curve.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feGaussianBlur)
    svg_fe_gaussian_blur => SvgFeGaussianBlur, "feGaussianBlur", Svg, false;

    /// Fetches image data from an external source and provides the pixel data as output.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feImage)
    svg_fe_image => SvgFeImage, "feImage", Svg, false;

    /// Allows filter effects to be applied concurrently instead of sequentially.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMerge)
    svg_fe_merge => SvgFeMerge, "feMerge", Svg, false;

    /// Takes the result of another filter to be processed by its parent `<feMerge>`.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMergeNode)
    svg_fe_merge_node => SvgFeMergeNode, "feMergeNode", Svg, false;

    /// Used to erode or dilate the input image. Its usefulness lies especially in fattening or thinning effects.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMorphology)
    svg_fe_morphology => SvgFeMorphology, "feMorphology", Svg, false;

    /// Allows to offset the input image. The input image as a whole is offset by the values specified in the dx and dy attributes.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feOffset)
    svg_fe_offset => SvgFeOffset, "feOffset", Svg, false;

    /// Defines a light source which allows to create a point light effect.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/fePointLight)
    svg_fe_point_light => SvgFePointLight, "fePointLight", Svg, false;

    /// Lights a source graphic using the alpha channel as a bump map.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feSpecularLighting)
    svg_fe_specular_lighting => SvgFeSpecularLighting, "feSpecularLighting", Svg, false;

    /// Defines a light source that can be used to create a spotlight effect.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feSpotLight)
    svg_fe_spot_light => SvgFeSpotLight, "feSpotLight", Svg, false;

    /// Allows you to fill a target rectangle with a repeated, tiled pattern of an input image.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feTile)
    svg_fe_tile => SvgFeTile, "feTile", Svg, false;

    /// Creates an image using the Perlin turbulence function.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feTurbulence)
    svg_fe_turbulence => SvgFeTurbulence, "feTurbulence", Svg, false;

    /// Defines a custom filter effect by grouping atomic filter primitives.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/filter)
    svg_filter => SvgFilter, "filter", Svg, false;

    /// Includes elements from a different XML namespace.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/foreignObject)
    svg_foreign_object => SvgForeignObject, "foreignObject", Svg, false;

    /// A container used to group other SVG elements.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/g)
    group => Group, "g", Svg, false;

    /// Includes images inside SVG documents. It can display raster image files or other SVG files.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/image)
    svg_image => SvgImage, "image", Svg, false;

    /// An SVG basic shape used to create a line connecting two points.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/line)
    svg_line => SvgLine, "line", Svg, false;

    /// Lets authors define linear gradients to apply to other SVG elements.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/linearGradient)
    svg_linear_gradient => SvgLinearGradient, "linearGradient", Svg, false;

    /// Defines a graphic used for drawing arrowheads or polymarkers on a given `<path>`, `<line>`, `<polyline>` or `<polygon>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/marker)
    svg_marker => SvgMarker, "marker", Svg, false;

    /// Defines an alpha mask for compositing the current object into the background.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/mask)
    svg_mask => SvgMask, "mask", Svg, false;

    /// Allows to add metadata to SVG content.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/metadata)
    svg_metadata => SvgMetadata, "metadata", Svg, false;

    /// A sub-element for the `<animateMotion>` element that provides the ability to reference an external `<path>` element as the definition of a motion path.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/mpath)
    svg_mpath => SvgMpath, "mpath", Svg, false;

    /// The generic element to define a shape. All the basic shapes can be created with a path element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/path)
    svg_path => SvgPath, "path", Svg, false;

    /// Defines a graphics object which can be redrawn at repeated x- and y-coordinate intervals ("tiled") to cover an area.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/pattern)
    svg_pattern => SvgPattern, "pattern", Svg, false;

    /// Defines a closed shape consisting of a set of connected straight line segments.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polygon)
    svg_polygon => SvgPolygon, "polygon", Svg, false;

    /// An SVG basic shape that creates straight lines connecting several points.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polyline)
    svg_polyline => SvgPolyline, "polyline", Svg, false;

    /// Lets authors define radial gradients that can be applied to fill or stroke of graphical elements.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/radialGradient)
    svg_radial_gradient => SvgRadialGradient, "radialGradient", Svg, false;

    /// A basic SVG shape that draws rectangles, defined by their position, width, and height.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/rect)
    svg_rect => SvgRect, "rect", Svg, false;

    /// Allows to add scripts to an SVG document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/script)
    svg_script => SvgScript, "script", Svg, false;

    /// Provides a method of setting the value of an attribute for a specified duration.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/set)
    svg_set => SvgSet, "set", Svg, false;

    /// Defines a color and its position to use on a gradient. This element is always a child of a `<linearGradient>` or `<radialGradient>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/stop)
    svg_stop => SvgStop, "stop", Svg, false;

    /// Allows style sheets to be embedded directly within SVG content.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/style)
    svg_style => SvgStyle, "style", Svg, false;

    /// A container that defines a new coordinate system and viewport. It is used as the outermost element of SVG documents, but it can also be used to embed an SVG fragment inside an SVG or HTML document.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/svg)
    svg => Svg, "svg", Svg, false;

    /// Evaluates any requiredFeatures, requiredExtensions and systemLanguage attributes on its direct child elements in order, and then renders the first child where these attributes evaluate to true.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/switch)
    svg_switch => SvgSwitch, "switch", Svg, false;

    /// Used to define graphical template objects which can be instantiated by a `<use>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/symbol)
    svg_symbol => SvgSymbol, "symbol", Svg, false;

    /// Draws a graphics element consisting of text.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text)
    svg_text => SvgText, "text", Svg, false;

    /// To render text along the shape of a `<path>`, enclose the text in a `<textPath>` element that has an href attribute with a reference to the `<path>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/textPath)
    svg_text_path => SvgTextPath, "textPath", Svg, false;

    /// Provides an accessible, short-text description of any SVG container element or graphics element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/title)
    svg_title => SvgTitle, "title", Svg, false;

    /// Defines a subtext within a `<text>` element or another `<tspan>` element.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/tspan)
    svg_tspan => SvgTspan, "tspan", Svg, false;

    /// Takes nodes from within the SVG document, and duplicates them somewhere else.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/use)
    svg_use => SvgUse, "use", Svg, true;

    /// A view is a defined way to view the image, like a zoom level or a detail view.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/view)
    svg_view => SvgView, "view", Svg, false;
}
