pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #161616;
  --bg-elev: #1e1e1e;
  --card: #252525;
  --border: rgba(255, 255, 255, 0.06);
  --border-strong: rgba(255, 255, 255, 0.14);
  --text: #f2f2f2;
  --text-dim: #9ca3af;
  --text-muted: #6b7280;
  --accent: #f97316;
  --positive: #34d399;
  --negative: #ef4444;
  --warning: #facc15;
  --info: #60a5fa;
  --buy: #3b82f6;
  --sell: #ef4444;
  --trend: #fbbf24;
  --price: #10b981;
  --radius: 14px;
  --radius-pill: 999px;
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
  --font-mono: "JetBrains Mono", ui-monospace, monospace;
}

* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
}
.mono { font-family: var(--font-mono); }

/* ---------- Shell -------------------------------------------------------- */
.app-shell { min-height: 100vh; display: flex; flex-direction: column; }
.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 18px 28px;
  border-bottom: 1px solid var(--border);
  background: rgba(0, 0, 0, 0.25);
}
.brand { margin: 0; font-size: 24px; font-weight: 700; color: var(--accent); }
.header-right { display: flex; align-items: center; gap: 16px; }
.header-note { font-size: 12px; color: var(--text-muted); }
.header-user { font-size: 12px; color: var(--text-dim); }
.btn-logout {
  background: none;
  border: 1px solid var(--border-strong);
  border-radius: 8px;
  color: var(--text-dim);
  padding: 6px 12px;
  font-weight: 700;
  font-size: 12px;
  cursor: pointer;
}
.btn-logout:hover { color: var(--negative); border-color: var(--negative); }
.app-main { flex: 1; width: min(1180px, 100%); margin: 0 auto; padding: 28px 16px; }

/* ---------- Dashboard states --------------------------------------------- */
.dash { display: flex; flex-direction: column; gap: 24px; }
.dash-loading, .dash-offline {
  height: 260px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 14px;
  color: var(--text-dim);
}
.spinner {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 3px solid transparent;
  border-bottom-color: var(--accent);
  animation: spin 0.9s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.offline-icon {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 26px;
  font-weight: 700;
  color: var(--negative);
  border: 2px solid var(--negative);
}
.btn-retry {
  padding: 8px 22px;
  border-radius: 10px;
  border: 1px solid rgba(249, 115, 22, 0.25);
  background: rgba(249, 115, 22, 0.1);
  color: var(--accent);
  font-weight: 700;
  cursor: pointer;
}
.btn-retry:hover { background: rgba(249, 115, 22, 0.2); }

.fatal-banner {
  background: rgba(127, 29, 29, 0.5);
  border: 1px solid var(--negative);
  border-radius: var(--radius);
  padding: 20px 24px;
}
.fatal-banner h3 { margin: 0 0 6px; font-size: 18px; }
.fatal-banner p { margin: 0; font-size: 13px; opacity: 0.85; }

/* ---------- Stat cards --------------------------------------------------- */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 20px;
}
.stat-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 22px;
  display: flex;
  flex-direction: column;
  gap: 6px;
}
.card-label {
  font-size: 12px;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-dim);
  font-weight: 600;
}
.card-value { margin: 6px 0 0; font-size: 28px; font-weight: 700; letter-spacing: -0.01em; }
.card-sub { margin: 0; font-size: 12px; color: var(--text-muted); }
.tone-positive .card-value { color: var(--positive); }
.tone-negative .card-value { color: var(--negative); }
.tone-muted .card-value { color: var(--text-dim); }
.tone-price .card-value { color: var(--warning); }
.tone-info .card-value { color: var(--info); }
.tone-accent .card-value { color: var(--accent); }
.command-card { justify-content: space-between; gap: 16px; }

/* ---------- Panels ------------------------------------------------------- */
.panel {
  background: var(--bg-elev);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 22px;
}
.panel-title { margin: 0; font-size: 15px; font-weight: 700; }

.health-grid {
  margin-top: 16px;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 14px;
}
.health-item {
  border-radius: 12px;
  border: 1px solid var(--border-strong);
  padding: 12px 14px;
  display: flex;
  flex-direction: column;
  gap: 4px;
}
.health-label {
  font-size: 11px;
  text-transform: uppercase;
  font-weight: 700;
  color: var(--text-dim);
}
.health-detail { font-size: 13px; }
.status-good { border-color: rgba(52, 211, 153, 0.35); color: var(--positive); }
.status-warn { border-color: rgba(250, 204, 21, 0.35); color: var(--warning); }
.status-error { border-color: rgba(239, 68, 68, 0.35); color: var(--negative); }

/* ---------- Trade feed --------------------------------------------------- */
.feed-panel { padding: 0; overflow: hidden; }
.feed-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 20px 22px;
  border-bottom: 1px solid var(--border);
  background: rgba(0, 0, 0, 0.2);
}
.feed-scroll { max-height: 560px; overflow: auto; }
.feed-table { width: 100%; border-collapse: collapse; text-align: left; }
.feed-table thead th {
  position: sticky;
  top: 0;
  padding: 12px 16px;
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--text-dim);
  background: var(--bg-elev);
  border-bottom: 1px solid var(--border);
}
.feed-table td {
  padding: 12px 16px;
  font-size: 13px;
  color: var(--text-dim);
  border-bottom: 1px solid var(--border);
  white-space: nowrap;
}
.feed-table tbody tr:hover { background: rgba(255, 255, 255, 0.03); }
.feed-empty { text-align: center; padding: 48px 16px; color: var(--text-muted); font-style: italic; }
.dot {
  display: inline-block;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--positive);
  margin-right: 8px;
}

.pill {
  display: inline-flex;
  align-items: center;
  padding: 2px 10px;
  border-radius: var(--radius-pill);
  font-size: 11px;
  font-weight: 700;
  border: 1px solid var(--border-strong);
}
.pill-muted { color: var(--text-muted); }
.side-buy { color: var(--buy); border-color: rgba(59, 130, 246, 0.35); background: rgba(59, 130, 246, 0.08); }
.side-sell { color: var(--sell); border-color: rgba(239, 68, 68, 0.35); background: rgba(239, 68, 68, 0.08); }

/* ---------- Chart -------------------------------------------------------- */
.chart-panel { padding: 0; border: none; background: none; }
.chart-card {
  background: var(--bg-elev);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 14px;
}
.chart-head { display: flex; align-items: flex-start; justify-content: space-between; }
.chart-subtitle { margin: 4px 0 0; font-size: 11px; color: var(--text-muted); }
.frame-switch {
  display: flex;
  gap: 4px;
  background: rgba(0, 0, 0, 0.25);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 4px;
}
.frame-btn {
  border: none;
  background: none;
  color: var(--text-muted);
  font-size: 11px;
  font-weight: 700;
  padding: 4px 12px;
  border-radius: 8px;
  cursor: pointer;
}
.frame-btn:hover { color: var(--text-dim); }
.frame-btn.active {
  color: var(--positive);
  background: rgba(52, 211, 153, 0.12);
  border: 1px solid rgba(52, 211, 153, 0.25);
}
.chart-empty {
  height: 320px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: 13px;
}
.chart-empty-sub { font-size: 11px; opacity: 0.6; }
.chart-body { display: flex; flex-direction: column; gap: 10px; }
.chart-svg { width: 100%; height: 340px; }
.gridline { stroke: #333; stroke-dasharray: 3 3; }
.axis-label { fill: #666; font-size: 10px; font-family: var(--font-mono); }
.price-line { fill: none; stroke: var(--price); stroke-width: 2; }
.trend-line { fill: none; stroke: var(--trend); stroke-width: 2; stroke-dasharray: 5 5; }
.marker { cursor: pointer; }
.marker-buy { fill: var(--buy); }
.marker-sell { fill: var(--sell); }
.chart-inspector { min-height: 38px; }
.inspector-card {
  display: flex;
  align-items: center;
  gap: 14px;
  flex-wrap: wrap;
  font-size: 12px;
  color: var(--text-dim);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 8px 14px;
}
.inspector-idle { color: var(--text-muted); font-style: italic; }
.inspector-date { text-transform: uppercase; font-size: 11px; letter-spacing: 0.05em; }
.inspector-price { font-size: 15px; font-weight: 700; color: var(--text); }
.inspector-trend { color: var(--trend); }

/* ---------- Swipe control ------------------------------------------------ */
.swipe-track {
  position: relative;
  width: 100%;
  height: 56px;
  border-radius: 12px;
  overflow: hidden;
  user-select: none;
  touch-action: none;
}
.swipe-bg {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 12px;
}
.swipe-bg-start {
  background: rgba(6, 78, 59, 0.35);
  border: 1px solid rgba(52, 211, 153, 0.25);
  color: var(--positive);
}
.swipe-bg-stop {
  background: rgba(127, 29, 29, 0.35);
  border: 1px solid rgba(239, 68, 68, 0.25);
  color: var(--negative);
}
.swipe-label {
  font-size: 12px;
  font-weight: 700;
  letter-spacing: 0.12em;
  text-transform: uppercase;
}
.swipe-handle {
  position: absolute;
  top: 4px;
  bottom: 4px;
  left: 4px;
  width: 48px;
  border-radius: 10px;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: grab;
  color: #fff;
  z-index: 1;
}
.swipe-handle:active { cursor: grabbing; }
.swipe-handle-start { background: linear-gradient(90deg, #059669, #34d399); }
.swipe-handle-stop { background: linear-gradient(90deg, #dc2626, #ef4444); }
.swipe-disabled { opacity: 0.6; pointer-events: none; }
.swipe-glyph { font-size: 14px; }

/* ---------- Login -------------------------------------------------------- */
.login-wrap {
  min-height: 60vh;
  display: flex;
  align-items: center;
  justify-content: center;
}
.login-card {
  width: min(420px, 100%);
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 20px;
  padding: 32px;
}
.login-head { text-align: center; margin-bottom: 24px; }
.login-head h2 { margin: 0 0 8px; font-size: 22px; }
.login-head p { margin: 0; font-size: 13px; color: var(--text-dim); }
.login-form { display: flex; flex-direction: column; gap: 16px; }
.input-stack { display: flex; flex-direction: column; gap: 6px; }
.input-label {
  font-size: 11px;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-muted);
}
.login-form input {
  background: rgba(0, 0, 0, 0.3);
  border: 1px solid var(--border-strong);
  border-radius: 12px;
  padding: 12px 14px;
  color: var(--text);
  font-size: 14px;
}
.login-form input:focus { outline: none; border-color: var(--accent); }
.login-error {
  background: rgba(239, 68, 68, 0.1);
  border: 1px solid rgba(239, 68, 68, 0.25);
  color: var(--negative);
  border-radius: 12px;
  padding: 10px 14px;
  font-size: 13px;
  text-align: center;
}
.btn-primary {
  background: linear-gradient(90deg, #ea580c, #f97316);
  border: none;
  border-radius: 12px;
  color: #fff;
  font-weight: 700;
  padding: 14px;
  font-size: 14px;
  cursor: pointer;
}
.btn-primary:disabled { opacity: 0.5; cursor: default; }

/* ---------- Logs --------------------------------------------------------- */
.log-panel { border-color: rgba(239, 68, 68, 0.2); }
.log-scroll {
  margin-top: 12px;
  max-height: 360px;
  overflow: auto;
  font-size: 11px;
  display: flex;
  flex-direction: column;
  gap: 4px;
}
.log-line { color: var(--text-muted); }
.log-error { color: var(--negative); font-weight: 700; }
"#;
