//! Upload page served at `/`.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>titlecheck</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }
  pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1>Title metadata check</h1>
<p>Upload a <code>.csv</code>, <code>.tsv</code>, <code>.txt</code> or <code>.xlsx</code> sheet.</p>
<form id="upload">
  <input type="file" name="file" accept=".csv,.tsv,.txt,.xlsx" required>
  <button type="submit">Validate</button>
</form>
<p id="status"></p>
<pre id="result" hidden></pre>
<script>
  const form = document.getElementById("upload");
  const status = document.getElementById("status");
  const result = document.getElementById("result");

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    status.textContent = "Validating...";
    status.className = "";
    result.hidden = true;

    const response = await fetch("/api/validate", { method: "POST", body: new FormData(form) });
    const body = await response.json();

    if (response.ok) {
      const s = body.summary;
      status.textContent = s.is_clean
        ? `No problems in ${s.rows_checked} rows.`
        : `${s.total_findings} findings in ${s.rows_with_findings} of ${s.rows_checked} rows.`;
      result.textContent = JSON.stringify(body.report, null, 2);
    } else {
      status.textContent = body.message;
      status.className = "error";
      result.textContent = JSON.stringify(body, null, 2);
    }
    result.hidden = false;
  });
</script>
</body>
</html>
"#;

/// Serve the upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
