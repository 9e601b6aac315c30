//! Embedded submission page.

/// HTML form served at `/`. Posts `message` and `date` to `/submit`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tipper</title>
    <style>
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        background: #f4f1ea;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 20px;
    }

    .container {
        background: white;
        border-radius: 4px;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
        max-width: 420px;
        width: 100%;
        padding: 32px;
    }

    h1 {
        font-size: 24px;
        margin-bottom: 4px;
    }

    .subtitle {
        color: #718096;
        font-size: 14px;
        margin-bottom: 24px;
    }

    .form-group {
        margin-bottom: 20px;
    }

    label {
        display: block;
        font-weight: 600;
        margin-bottom: 6px;
        font-size: 13px;
        text-transform: uppercase;
    }

    input[type="date"],
    textarea {
        width: 100%;
        padding: 10px 12px;
        border: 1px solid #cbd5e0;
        border-radius: 4px;
        font-size: 15px;
    }

    textarea {
        min-height: 180px;
        resize: vertical;
        font-family: 'SF Mono', Monaco, Consolas, 'Courier New', monospace;
    }

    .hint {
        color: #a0aec0;
        font-size: 12px;
        margin-top: 4px;
    }

    button {
        background: #2d3748;
        color: white;
        border: none;
        padding: 12px;
        font-size: 15px;
        border-radius: 4px;
        cursor: pointer;
        width: 100%;
    }

    #status {
        margin-top: 16px;
        font-size: 14px;
        text-align: center;
    }
    </style>
</head>
<body>
    <div class="container">
        <h1>Tipper</h1>
        <p class="subtitle">Send a note to the receipt printer</p>

        <form id="receipt" method="POST" action="/submit">
            <div class="form-group">
                <label for="message">Message</label>
                <textarea id="message" name="message" required placeholder="**Markdown** works: # headings, - lists, > quotes"></textarea>
                <p class="hint">Headings, bold, __underline__, lists, quotes and code are printed.</p>
            </div>

            <div class="form-group">
                <label for="date">Date (optional)</label>
                <input type="date" id="date" name="date">
                <p class="hint">Leave empty to use today's date.</p>
            </div>

            <button type="submit">Print</button>
        </form>
        <p id="status"></p>
    </div>
    <script>
    document.getElementById('receipt').addEventListener('submit', async (event) => {
        event.preventDefault();
        const form = new FormData(event.target);
        if (!form.get('date')) form.delete('date');
        const response = await fetch('/submit', {
            method: 'POST',
            body: new URLSearchParams(form),
        });
        document.getElementById('status').textContent = await response.text();
        if (response.ok) event.target.reset();
    });
    </script>
</body>
</html>"#;
