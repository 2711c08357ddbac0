//! Golden HTML fragments shaped like the portal's responses.

pub const LOGIN_PAGE: &str = r#"<html><head>
<meta name="csrf-token" content="tok-login">
</head><body>
<form action="/Academy/j_spring_security_check" method="post">
<input type="hidden" name="_csrf" value="tok-login">
<input name="j_username"><input name="j_password" type="password">
</form></body></html>"#;

pub const LOGIN_OK: &str = r#"<html><body>
<div class="navbar"><a href="/Academy/logout">Logout</a></div>
</body></html>"#;

pub const LOGIN_REJECTED: &str = r#"<html><body>
<div class="alert">Invalid username or password</div>
</body></html>"#;

pub const PROFILE_PAGE: &str = r#"<html><head>
<meta name="csrf-token" content="tok-profile">
</head><body><a href="/Academy/logout">Logout</a></body></html>"#;

pub const SEMESTERS: &str = r#"<option value="">Select Semester</option>
<option value="1881">Sem 1</option>"#;

pub const SUBJECTS: &str = r#"<div id="getStudentSubjectsBasedOnSemesters">
<table class="table">
<thead><tr><th>Course Code</th><th>Course Title</th><th>Course Type</th></tr></thead>
<tbody>
<tr onclick="clickoncoursecontent('8801')"><td>UE20MA101</td><td>Engineering Mathematics</td><td>Core</td></tr>
<tr><td>UE20CS100</td><td>Orientation</td><td>Audit</td></tr>
<tr onclick="clickOnCourseContent('9001')"><td>UE20CS201</td><td>Discrete Mathematics</td><td>Core</td></tr>
</tbody>
</table>
</div>"#;

pub const UNITS: &str = r##"<ul class="nav nav-tabs" id="courselistunit">
<li><a href="#courseUnit_499" onclick="handleclassUnit('499')">Unit 1: Logic</a></li>
<li><a href="#courseUnit_500" onclick="handleclassUnit('500')">Unit 2: Set Theory</a></li>
</ul>"##;

pub const CLASSES: &str = r##"<table class="table">
<thead><tr><th>Class</th><th>AV Summary</th><th>Live Videos</th><th>Slides</th></tr></thead>
<tbody>
<tr><td onclick="handleclasscoursecontentunit('c0ffee01','9001','500','1','2')">Intro to Sets</td><td>-</td><td>-</td><td><a href="#">1</a></td></tr>
<tr><td onclick="handleclasscoursecontentunit('c0ffee02','9001','500','2','2')">Set Operations</td><td>-</td><td>-</td><td><a href="#">1</a></td></tr>
<tr><td onclick="handleclasscoursecontentunit('c0ffee03','9001','500','3','2')">Venn Diagrams</td><td>-</td><td>-</td><td><a href="#">1</a></td></tr>
</tbody>
</table>"##;

/// Preview markup exposing one download trigger.
pub fn preview_with(id: &str) -> String {
    format!(
        r#"<div class="slide"><a href="javascript:void(0)" onclick="downloadcoursedoc('{id}')">Download</a></div>"#
    )
}

pub const PREVIEW_TWO_DOCS: &str = r#"<div>
<a onclick="downloadcoursedoc('aaaa1111')">Slides</a>
<a onclick="downloadcoursedoc('bbbb2222')">Notes</a>
<a onclick="downloadcoursedoc('aaaa1111')">Slides (again)</a>
</div>"#;

pub const PREVIEW_EMPTY: &str = r#"<div class="slide">No preview available</div>"#;

pub const LEGACY_HREF: &str = r#"<ul>
<li><a href="/Academy/a/referenceMeterials/downloadcoursedoc/abc123def" target="_blank">Unit notes</a></li>
</ul>"#;
